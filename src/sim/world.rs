//! Viewport model and resize handling

use serde::{Deserialize, Serialize};

use super::rng::clamp;
use super::state::PlayerBody;
use crate::consts::*;
use crate::tuning::{Environment, TuningConfig};

/// Logical viewport and the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// y of the ground surface (px from top)
    pub ground_y: f32,
}

impl Viewport {
    /// Build from raw dimensions; degenerate sizes are clamped to 1 px
    pub fn new(width: f32, height: f32, ground_ratio: f32) -> Self {
        let width = sanitize_dim(width);
        let height = sanitize_dim(height);
        Self {
            width,
            height,
            ground_y: (height * ground_ratio).round(),
        }
    }
}

fn sanitize_dim(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_DIM)
    } else {
        MIN_VIEWPORT_DIM
    }
}

/// Recompute the viewport for `env` and refit the player to it.
///
/// Outside a run the player is snapped to the floor. During a run a mid-air
/// player keeps its height (clamped above the floor) and a grounded player
/// follows the floor.
pub fn resize_world(
    env: &Environment,
    tuning: &TuningConfig,
    player: &mut PlayerBody,
    running: bool,
) -> Viewport {
    let viewport = Viewport::new(env.width, env.height, tuning.ground_ratio);

    let base = viewport.width.min(viewport.height);
    let scale = tuning.player_scale;
    player.width = clamp(
        base * PLAYER_WIDTH_RATIO * scale,
        PLAYER_MIN_WIDTH * scale,
        PLAYER_MAX_WIDTH * scale,
    )
    .round();
    player.height = clamp(
        base * PLAYER_HEIGHT_RATIO * scale,
        PLAYER_MIN_HEIGHT * scale,
        PLAYER_MAX_HEIGHT * scale,
    )
    .round();
    player.x = (viewport.width * tuning.player_x_ratio()).round();

    let floor = player.floor(viewport.ground_y);
    if !running || player.on_ground {
        player.park(viewport.ground_y);
    } else {
        player.y = player.y.min(floor);
    }

    log::debug!(
        "Resized to {}x{} (ground {}, mobile {})",
        viewport.width,
        viewport.height,
        viewport.ground_y,
        tuning.is_mobile
    );
    viewport
}
