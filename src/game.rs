//! Owned session context
//!
//! `Game` holds everything one session needs (tuning, viewport, state, RNG,
//! jump latch, storage) and exposes the operations a host frame loop calls:
//! `resize`, `request_jump`, `frame`. Several games can coexist; nothing is
//! global.

use crate::input::{InputEvent, JumpLatch};
use crate::persistence::{Storage, load_best_score, save_best_score};
use crate::settings::Settings;
use crate::sim::{
    GameState, RandomSource, SessionPhase, SimRng, StepOutcome, Viewport, resize_world, step,
};
use crate::tuning::{Environment, TuningConfig};

pub struct Game<S: Storage, R: RandomSource = SimRng> {
    settings: Settings,
    environment: Environment,
    tuning: TuningConfig,
    viewport: Viewport,
    state: GameState,
    rng: R,
    jump: JumpLatch,
    storage: S,
}

impl<S: Storage> Game<S, SimRng> {
    /// Create a game seeded from `settings.seed`, or from entropy
    pub fn new(settings: Settings, environment: Environment, storage: S) -> Self {
        let rng = match settings.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        log::info!("Game initialized with seed: {}", rng.seed());
        Self::with_rng(settings, environment, storage, rng)
    }
}

impl<S: Storage, R: RandomSource> Game<S, R> {
    /// Startup order: load best score, fit to the viewport, reset to Idle
    pub fn with_rng(settings: Settings, environment: Environment, storage: S, rng: R) -> Self {
        let tuning = settings.tuning_for(&environment);
        let best = load_best_score(&storage);
        let mut state = GameState::new(&tuning, best);
        let viewport = resize_world(&environment, &tuning, &mut state.player, false);

        let mut game = Self {
            settings,
            environment,
            tuning,
            viewport,
            state,
            rng,
            jump: JumpLatch::new(),
            storage,
        };
        game.reset_game();
        game
    }

    /// Re-resolve tuning and refit the world after a viewport change
    pub fn resize(&mut self, environment: Environment) {
        self.environment = environment;
        self.tuning = self.settings.tuning_for(&environment);
        let running = self.state.running();
        self.viewport = resize_world(&environment, &self.tuning, &mut self.state.player, running);
    }

    /// Return to Idle with an empty field
    pub fn reset_game(&mut self) {
        self.state.reset(&self.tuning, self.viewport.ground_y, &mut self.rng);
        self.jump.clear();
    }

    /// Idle | GameOver → Running
    pub fn start_game(&mut self) {
        self.state.start();
    }

    /// A jump edge from the input source.
    ///
    /// Starts the run from Idle, restarts it from GameOver, and latches a
    /// jump for the next frame in every case.
    pub fn request_jump(&mut self) {
        match self.state.phase {
            SessionPhase::Idle => self.start_game(),
            SessionPhase::GameOver => {
                self.reset_game();
                self.start_game();
            }
            SessionPhase::Running => {}
        }
        self.jump.request();
    }

    /// Forward a raw input event; non-jump events are ignored
    pub fn handle_event(&mut self, event: InputEvent) {
        if event.is_jump_trigger() {
            self.request_jump();
        }
    }

    /// Advance one frame. `dt` must be pre-clamped (see `FrameClock`).
    pub fn frame(&mut self, dt: f32) -> StepOutcome {
        let jump = self.jump.take();
        let outcome = step(
            &mut self.state,
            &self.tuning,
            &self.viewport,
            &mut self.rng,
            dt,
            jump,
        );
        if let StepOutcome::Collided { new_best: true, .. } = outcome {
            self.persist_best_score();
        }
        outcome
    }

    fn persist_best_score(&mut self) {
        match save_best_score(&mut self.storage, self.state.best_score) {
            Ok(()) => log::info!("Best score saved ({:.0})", self.state.best_score),
            Err(e) => log::warn!("Could not save best score: {e}"),
        }
    }

    /// Replace the settings and apply them to the current viewport
    pub fn apply_settings(&mut self, settings: Settings) {
        if let Err(e) = settings.save(&mut self.storage) {
            log::warn!("Could not save settings: {e}");
        }
        self.settings = settings;
        self.resize(self.environment);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn jump_pending(&self) -> bool {
        self.jump.is_pending()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
