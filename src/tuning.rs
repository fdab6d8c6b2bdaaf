//! Data-driven game balance
//!
//! Two presets (desktop / mobile) layered over shared defaults. The active
//! preset is picked from the display environment on every resize.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Display / input capabilities reported by the host on resize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Logical viewport width (CSS px)
    pub width: f32,
    /// Logical viewport height (CSS px)
    pub height: f32,
    /// Primary pointer is coarse (touch screen)
    pub coarse_pointer: bool,
    /// Viewport is narrow enough to count as a phone layout
    pub narrow_viewport: bool,
}

impl Environment {
    /// Build an environment from a viewport size, deriving `narrow_viewport`
    pub fn probe(width: f32, height: f32, coarse_pointer: bool) -> Self {
        Self {
            width,
            height,
            coarse_pointer,
            narrow_viewport: width <= NARROW_VIEWPORT_MAX_WIDTH,
        }
    }

    /// Whether the mobile preset applies
    pub fn is_mobile(&self) -> bool {
        self.coarse_pointer || self.narrow_viewport
    }
}

/// Active difficulty and physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Scroll / obstacle speed at t = 0 (px/s)
    pub base_speed: f32,
    /// Speed gained per second of running (px/s²)
    pub speed_ramp: f32,
    /// Optional ceiling on the ramped speed (None = unbounded)
    #[serde(default)]
    pub max_speed: Option<f32>,
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Initial upward speed of a jump (px/s)
    pub jump_velocity: f32,
    /// Spawn delay range (seconds, before speed scaling)
    pub spawn_min: f32,
    pub spawn_max: f32,
    pub is_mobile: bool,
    pub player_scale: f32,
    pub obstacle_scale: f32,
    /// Ground line as a fraction of viewport height
    pub ground_ratio: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl TuningConfig {
    /// Pointer-and-keyboard preset
    pub fn desktop() -> Self {
        Self {
            base_speed: 350.0,
            speed_ramp: 11.0,
            max_speed: None,
            gravity: 2600.0,
            jump_velocity: 980.0,
            spawn_min: 0.95,
            spawn_max: 1.7,
            is_mobile: false,
            player_scale: 2.5,
            obstacle_scale: 1.0,
            ground_ratio: 0.78,
        }
    }

    /// Touch / narrow screen preset: slower, floatier, smaller sprites
    pub fn mobile() -> Self {
        Self {
            base_speed: 310.0,
            speed_ramp: 8.8,
            max_speed: None,
            gravity: 2300.0,
            jump_velocity: 940.0,
            spawn_min: 0.9,
            spawn_max: 1.6,
            is_mobile: true,
            player_scale: 2.0,
            obstacle_scale: 0.95,
            ground_ratio: 0.8,
        }
    }

    /// Ramped speed after `time` seconds of running, capped by `max_speed`
    pub fn target_speed(&self, time: f32) -> f32 {
        let speed = self.base_speed + time * self.speed_ramp;
        match self.max_speed {
            Some(cap) => speed.min(cap.max(self.base_speed)),
            None => speed,
        }
    }

    /// Inset applied to each side of the player box for collisions
    pub fn hitbox_pad(&self) -> f32 {
        if self.is_mobile {
            HITBOX_PAD_MOBILE
        } else {
            HITBOX_PAD_DESKTOP
        }
    }

    /// Extra off-screen distance range for new obstacles
    pub fn spawn_buffer(&self) -> (f32, f32) {
        if self.is_mobile {
            (80.0, 160.0)
        } else {
            (60.0, 140.0)
        }
    }

    /// Player x as a fraction of viewport width
    pub fn player_x_ratio(&self) -> f32 {
        if self.is_mobile { 0.16 } else { 0.18 }
    }
}

/// Pick the preset matching the environment
pub fn resolve_tuning(env: &Environment) -> TuningConfig {
    if env.is_mobile() {
        TuningConfig::mobile()
    } else {
        TuningConfig::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(t: &TuningConfig) {
        assert!(t.spawn_min <= t.spawn_max);
        for v in [
            t.base_speed,
            t.speed_ramp,
            t.gravity,
            t.jump_velocity,
            t.spawn_min,
            t.player_scale,
            t.obstacle_scale,
            t.ground_ratio,
        ] {
            assert!(v > 0.0);
        }
    }

    #[test]
    fn test_presets_are_valid() {
        assert_valid(&TuningConfig::desktop());
        assert_valid(&TuningConfig::mobile());
    }

    #[test]
    fn test_resolve_desktop() {
        let env = Environment::probe(1280.0, 800.0, false);
        let t = resolve_tuning(&env);
        assert!(!t.is_mobile);
        assert_eq!(t.base_speed, 350.0);
        assert_eq!(t.ground_ratio, 0.78);
        assert_eq!(t.hitbox_pad(), 12.0);
    }

    #[test]
    fn test_resolve_mobile_from_either_signal() {
        let coarse = Environment::probe(1280.0, 800.0, true);
        assert!(resolve_tuning(&coarse).is_mobile);

        let narrow = Environment::probe(820.0, 900.0, false);
        assert!(narrow.narrow_viewport);
        let t = resolve_tuning(&narrow);
        assert!(t.is_mobile);
        assert_eq!(t.base_speed, 310.0);
        assert_eq!(t.hitbox_pad(), 6.0);
        assert_eq!(t.spawn_buffer(), (80.0, 160.0));
    }

    #[test]
    fn test_target_speed_unbounded_by_default() {
        let t = TuningConfig::desktop();
        assert_eq!(t.target_speed(0.0), 350.0);
        assert_eq!(t.target_speed(100.0), 350.0 + 1100.0);
    }

    #[test]
    fn test_target_speed_capped() {
        let t = TuningConfig {
            max_speed: Some(600.0),
            ..TuningConfig::desktop()
        };
        assert_eq!(t.target_speed(10.0), 460.0);
        assert_eq!(t.target_speed(1000.0), 600.0);
    }

    #[test]
    fn test_deserialize_without_max_speed() {
        let json = serde_json::to_string(&TuningConfig::mobile()).unwrap();
        let stripped = json.replace("\"max_speed\":null,", "");
        let t: TuningConfig = serde_json::from_str(&stripped).unwrap();
        assert_eq!(t, TuningConfig::mobile());
    }
}
