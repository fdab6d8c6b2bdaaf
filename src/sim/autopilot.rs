//! Attract-mode autopilot
//!
//! A simple reflex player for the idle demo screen and the headless native
//! runner. Gameplay code never consults it.

use super::state::GameState;

/// How far ahead (in seconds of travel) the autopilot reacts to obstacles
pub const AUTOPILOT_LEAD_SECONDS: f32 = 0.22;

/// Whether the autopilot would jump this frame
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.running() || !state.player.on_ground {
        return false;
    }

    let player_right = state.player.x + state.player.width;
    let lead = state.speed * AUTOPILOT_LEAD_SECONDS;

    state
        .obstacles
        .iter()
        .filter(|o| o.right() > state.player.x)
        .map(|o| o.x - player_right)
        .any(|gap| gap <= lead)
}
