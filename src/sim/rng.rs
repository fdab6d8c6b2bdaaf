//! Random number source and small math helpers
//!
//! Spawning draws all of its randomness through [`RandomSource`] so tests can
//! script exact values and runs can be replayed from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random source used by the simulation
pub trait RandomSource {
    /// Next value in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform value in [min, max). Returns `min` when the range is empty.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.unit() * (max - min)
    }
}

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Clamp that tolerates `min > max` (lower bound wins) instead of panicking
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimRng::new(12345);
        let mut b = SimRng::new(12345);
        let xs: Vec<f32> = (0..16).map(|_| a.unit()).collect();
        let ys: Vec<f32> = (0..16).map(|_| b.unit()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 12345);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let v = rng.range(0.95, 1.7);
            assert!((0.95..1.7).contains(&v));
        }
    }

    #[test]
    fn test_empty_range_returns_min() {
        let mut rng = SimRng::new(7);
        assert_eq!(rng.range(3.0, 3.0), 3.0);
        assert_eq!(rng.range(5.0, 1.0), 5.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 8.0, 2.0), 8.0);
    }
}
