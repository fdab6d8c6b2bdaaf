//! Collision detection between the player and obstacles
//!
//! Everything is an axis-aligned box. The player's box is shrunk by a
//! platform-dependent pad so near misses stay forgiving.

use glam::Vec2;

use super::state::{Obstacle, PlayerBody};
use crate::tuning::TuningConfig;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and size
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let min = Vec2::new(x, y);
        Self {
            min,
            max: min + Vec2::new(width, height),
        }
    }

    /// Shrink by `pad` on every side. Never inverts: a box thinner than
    /// `2 * pad` collapses to its centre line.
    pub fn inset(&self, pad: f32) -> Self {
        let center = (self.min + self.max) * 0.5;
        let min = (self.min + Vec2::splat(pad)).min(center);
        let max = (self.max - Vec2::splat(pad)).max(center);
        Self { min, max }
    }

    /// Strict overlap on both axes; shared edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl From<&Obstacle> for Aabb {
    fn from(o: &Obstacle) -> Self {
        Aabb::from_rect(o.x, o.y, o.width, o.height)
    }
}

/// The forgiving collision box of the player
pub fn player_hitbox(player: &PlayerBody, tuning: &TuningConfig) -> Aabb {
    Aabb::from_rect(player.x, player.y, player.width, player.height).inset(tuning.hitbox_pad())
}

/// True if the player hitbox overlaps any obstacle
pub fn collides(player: &PlayerBody, obstacles: &[Obstacle], tuning: &TuningConfig) -> bool {
    let hitbox = player_hitbox(player, tuning);
    obstacles.iter().any(|o| hitbox.overlaps(&Aabb::from(o)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleTint;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> PlayerBody {
        PlayerBody {
            x,
            y,
            width: 100.0,
            height: 120.0,
            vy: 0.0,
            on_ground: true,
        }
    }

    fn obstacle(x: f32, y: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            x,
            y,
            width,
            height,
            tint: ObstacleTint { hue: 28.0 },
        }
    }

    #[test]
    fn test_overlap_hit() {
        let tuning = TuningConfig::desktop();
        let player = player_at(100.0, 348.0);
        let o = obstacle(150.0, 408.0, 45.0, 60.0);
        assert!(collides(&player, &[o], &tuning));
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let tuning = TuningConfig::desktop();
        let player = player_at(100.0, 348.0);
        // Hitbox right edge = 100 + 100 - 12 = 188
        let touching = obstacle(188.0, 408.0, 45.0, 60.0);
        assert!(!collides(&player, &[touching.clone()], &tuning));

        let nudged = obstacle(187.9, 408.0, 45.0, 60.0);
        assert!(collides(&player, &[nudged], &tuning));
    }

    #[test]
    fn test_padding_forgives_near_miss() {
        let player = player_at(100.0, 348.0);
        // Overlaps the raw box by 8px but not the desktop hitbox (pad 12)
        let o = obstacle(192.0, 408.0, 45.0, 60.0);
        assert!(!collides(&player, &[o.clone()], &TuningConfig::desktop()));
        // Mobile pad is 6, so the same obstacle hits
        assert!(collides(&player, &[o], &TuningConfig::mobile()));
    }

    #[test]
    fn test_jumping_over_clears() {
        let tuning = TuningConfig::desktop();
        // Player bottom (minus pad) sits exactly on top of the obstacle
        let player = player_at(150.0, 408.0 - 120.0 + 12.0);
        let o = obstacle(150.0, 408.0, 45.0, 60.0);
        assert!(!collides(&player, &[o], &tuning));
    }

    #[test]
    fn test_any_obstacle_triggers() {
        let tuning = TuningConfig::desktop();
        let player = player_at(100.0, 348.0);
        let far = obstacle(900.0, 408.0, 45.0, 60.0);
        let near = obstacle(150.0, 408.0, 45.0, 60.0);
        assert!(!collides(&player, &[far.clone()], &tuning));
        assert!(collides(&player, &[far, near], &tuning));
        assert!(!collides(&player, &[], &tuning));
    }

    #[test]
    fn test_inset_never_inverts() {
        let b = Aabb::from_rect(0.0, 0.0, 10.0, 40.0).inset(12.0);
        assert!(b.min.x <= b.max.x);
        assert!(b.min.y <= b.max.y);
        assert_eq!(b.min.x, 5.0);
        assert_eq!(b.max.x, 5.0);
    }

    proptest! {
        #[test]
        fn prop_overlap_matches_interval_test(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::from_rect(ax, ay, aw, ah);
            let b = Aabb::from_rect(bx, by, bw, bh);
            let expected = a.min.x < b.max.x && b.min.x < a.max.x
                && a.min.y < b.max.y && b.min.y < a.max.y;
            prop_assert_eq!(a.overlaps(&b), expected);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
