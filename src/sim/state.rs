//! Game state and core simulation types
//!
//! The session state machine (Idle → Running → GameOver → reset) lives here,
//! together with the entities the step function mutates.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::tuning::TuningConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first input; background drifts, nothing else moves
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Frozen snapshot of the run that just ended
    GameOver,
}

/// The player's kinematic body (top-left anchored box)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, positive is down (px/s)
    pub vy: f32,
    pub on_ground: bool,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            x: 140.0,
            y: 0.0,
            width: 44.0,
            height: 56.0,
            vy: 0.0,
            on_ground: true,
        }
    }
}

impl PlayerBody {
    /// Resting y for this body on the given ground line
    pub fn floor(&self, ground_y: f32) -> f32 {
        ground_y - self.height
    }

    /// Place the body at rest on the ground line
    pub fn park(&mut self, ground_y: f32) {
        self.y = self.floor(ground_y);
        self.vy = 0.0;
        self.on_ground = true;
    }
}

/// Rendering-only colour of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTint {
    /// Hue in degrees
    pub hue: f32,
}

impl ObstacleTint {
    /// CSS colour string
    pub fn css(&self) -> String {
        format!("hsl({:.1}deg 72% 54%)", self.hue)
    }
}

/// A floor-aligned obstacle scrolling towards the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tint: ObstacleTint,
}

impl Obstacle {
    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: SessionPhase,
    /// Seconds elapsed while running
    pub time: f32,
    /// Cumulative background offset (cosmetic)
    pub scroll: f32,
    /// Current scroll / obstacle speed (px/s)
    pub speed: f32,
    pub score: f32,
    pub best_score: f32,
    /// Seconds until the next obstacle spawns
    pub next_spawn_in: f32,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub player: PlayerBody,
}

impl GameState {
    /// Fresh idle state carrying a previously stored best score
    pub fn new(tuning: &TuningConfig, best_score: f32) -> Self {
        Self {
            phase: SessionPhase::Idle,
            time: 0.0,
            scroll: 0.0,
            speed: tuning.base_speed,
            score: 0.0,
            best_score,
            next_spawn_in: tuning.spawn_min,
            obstacles: Vec::new(),
            player: PlayerBody::default(),
        }
    }

    pub fn running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Return to Idle: clear the run, park the player, reseed the spawn timer
    pub fn reset(&mut self, tuning: &TuningConfig, ground_y: f32, rng: &mut impl RandomSource) {
        self.phase = SessionPhase::Idle;
        self.time = 0.0;
        self.scroll = 0.0;
        self.speed = tuning.base_speed;
        self.score = 0.0;
        self.next_spawn_in = rng.range(tuning.spawn_min, tuning.spawn_max);
        self.obstacles.clear();
        self.player.park(ground_y);
    }

    /// Idle | GameOver → Running. No-op while already running.
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Running {
            self.phase = SessionPhase::Running;
            log::info!("Run started (best {:.0})", self.best_score);
        }
    }

    /// Running → GameOver. Returns true when the run set a new best score.
    pub fn end_game(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.phase = SessionPhase::GameOver;
        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }
        log::info!(
            "Game over: score {:.0}, best {:.0}{}",
            self.score,
            self.best_score,
            if new_best { " (new best)" } else { "" }
        );
        new_best
    }
}
