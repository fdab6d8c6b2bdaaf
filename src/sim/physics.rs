//! Player integration (semi-implicit Euler with a hard floor)

use super::state::PlayerBody;
use crate::tuning::TuningConfig;

/// Advance the player by `dt` seconds.
///
/// `dt` is expected to be pre-clamped by the frame driver (see
/// [`crate::clock::FrameClock`]). A jump request only takes effect while
/// grounded; requests in the air are dropped.
pub fn step_player(
    body: &mut PlayerBody,
    tuning: &TuningConfig,
    ground_y: f32,
    dt: f32,
    jump_requested: bool,
) {
    if jump_requested && body.on_ground {
        body.vy = -tuning.jump_velocity;
        body.on_ground = false;
    }

    body.vy += tuning.gravity * dt;
    body.y += body.vy * dt;

    let floor = body.floor(ground_y);
    if body.y >= floor {
        body.y = floor;
        body.vy = 0.0;
        body.on_ground = true;
    }
}
