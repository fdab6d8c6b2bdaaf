//! Frame clock: turns host timestamps into clamped simulation deltas

use crate::consts::MAX_FRAME_DT;

/// Converts `requestAnimationFrame`-style timestamps (ms) into `dt` seconds.
///
/// The first frame yields 0. Stalls (tab in background, debugger) are capped
/// at `max_dt` so a single step never integrates a large jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Delta since the previous call, in seconds, within [0, max_dt]
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let last = self.last_ms.replace(timestamp_ms).unwrap_or(timestamp_ms);
        let dt = ((timestamp_ms - last) / 1000.0) as f32;
        if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }

    /// Forget the last timestamp (e.g. after the page was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(5000.0), 0.0);
    }

    #[test]
    fn test_normal_frame() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert_eq!(clock.tick(6000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert_eq!(clock.tick(900.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        clock.reset();
        assert_eq!(clock.tick(9000.0), 0.0);
    }
}
