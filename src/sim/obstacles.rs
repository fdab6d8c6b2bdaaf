//! Obstacle spawning, movement and culling

use super::rng::{RandomSource, clamp};
use super::state::{Obstacle, ObstacleTint};
use super::world::Viewport;
use crate::consts::*;
use crate::tuning::TuningConfig;

/// Create a floor-aligned obstacle just past the right edge of the viewport.
///
/// Draw order is width, height, spawn buffer, hue.
pub fn spawn_obstacle(
    viewport: &Viewport,
    tuning: &TuningConfig,
    rng: &mut impl RandomSource,
) -> Obstacle {
    let scale = tuning.obstacle_scale;

    let (w_lo, w_hi) = OBSTACLE_WIDTH_RATIO;
    let width = clamp(
        rng.range(viewport.width * w_lo, viewport.width * w_hi) * scale,
        OBSTACLE_MIN_WIDTH * scale,
        OBSTACLE_MAX_WIDTH * scale,
    )
    .round();

    let (h_lo, h_hi) = OBSTACLE_HEIGHT_RATIO;
    let height = clamp(
        rng.range(viewport.height * h_lo, viewport.height * h_hi) * scale,
        OBSTACLE_MIN_HEIGHT * scale,
        OBSTACLE_MAX_HEIGHT * scale,
    )
    .round();

    let (buf_lo, buf_hi) = tuning.spawn_buffer();
    let buffer = rng.range(buf_lo, buf_hi);

    let (hue_lo, hue_hi) = OBSTACLE_HUE;
    let hue = rng.range(hue_lo, hue_hi);

    Obstacle {
        x: viewport.width + width + buffer,
        y: viewport.ground_y - height,
        width,
        height,
        tint: ObstacleTint { hue },
    }
}

/// Seconds until the next spawn. Faster runs spawn more often, within bounds.
pub fn next_spawn_delay(tuning: &TuningConfig, speed: f32, rng: &mut impl RandomSource) -> f32 {
    let factor = if speed.is_finite() && speed > 0.0 {
        clamp(SPAWN_REFERENCE_SPEED / speed, SPAWN_FACTOR_MIN, SPAWN_FACTOR_MAX)
    } else {
        SPAWN_FACTOR_MAX
    };
    rng.range(tuning.spawn_min, tuning.spawn_max) * factor
}

/// Scroll obstacles left and drop those fully past the cull line
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, dt: f32) {
    let dx = speed * dt;
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= dx;
    }
    obstacles.retain(|o| o.right() > CULL_X);
}
