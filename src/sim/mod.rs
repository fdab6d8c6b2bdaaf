//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - No rendering, DOM or storage dependencies
//! - Randomness only through an injected `RandomSource`
//! - No fallible operations: bad inputs are clamped, never reported

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod state;
pub mod tick;
pub mod world;

pub use autopilot::autopilot_wants_jump;
pub use collision::{Aabb, collides, player_hitbox};
pub use obstacles::{advance_obstacles, next_spawn_delay, spawn_obstacle};
pub use physics::step_player;
pub use rng::{RandomSource, SimRng, clamp};
pub use state::{GameState, Obstacle, ObstacleTint, PlayerBody, SessionPhase};
pub use tick::{StepOutcome, step};
pub use world::{Viewport, resize_world};
