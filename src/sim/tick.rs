//! Per-frame simulation step
//!
//! Advances time, speed, scroll, player physics, spawning, obstacle movement,
//! collision and scoring for one frame.

use super::collision::collides;
use super::obstacles::{advance_obstacles, next_spawn_delay, spawn_obstacle};
use super::physics::step_player;
use super::rng::RandomSource;
use super::state::GameState;
use super::world::Viewport;
use crate::consts::*;
use crate::tuning::TuningConfig;

/// What happened during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Not running: only the background drifted
    Idle,
    /// A normal running frame
    Advanced,
    /// The player hit an obstacle; the session is now GameOver
    Collided { score: f32, new_best: bool },
}

/// Advance the session by `dt` seconds.
///
/// `dt` should already be clamped by the frame driver. Negative or
/// non-finite values are treated as zero so a bad frame cannot corrupt
/// the session.
pub fn step(
    state: &mut GameState,
    tuning: &TuningConfig,
    viewport: &Viewport,
    rng: &mut impl RandomSource,
    dt: f32,
    jump_requested: bool,
) -> StepOutcome {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let running = state.running();

    if running {
        state.time += dt;
    }
    state.speed = if running {
        tuning.target_speed(state.time)
    } else {
        tuning.base_speed
    };
    let drift = if running {
        state.speed
    } else {
        tuning.base_speed * IDLE_SCROLL_FACTOR
    };
    state.scroll += drift * dt;

    if !running {
        return StepOutcome::Idle;
    }

    step_player(&mut state.player, tuning, viewport.ground_y, dt, jump_requested);

    state.next_spawn_in -= dt;
    if state.next_spawn_in <= 0.0 {
        let obstacle = spawn_obstacle(viewport, tuning, rng);
        log::debug!(
            "Spawned obstacle {}x{} at x={:.0}",
            obstacle.width,
            obstacle.height,
            obstacle.x
        );
        state.obstacles.push(obstacle);
        state.next_spawn_in = next_spawn_delay(tuning, state.speed, rng);
    }

    advance_obstacles(&mut state.obstacles, state.speed, dt);

    if collides(&state.player, &state.obstacles, tuning) {
        let new_best = state.end_game();
        return StepOutcome::Collided {
            score: state.score,
            new_best,
        };
    }

    state.score += state.speed * dt * SCORE_RATE;
    StepOutcome::Advanced
}
