//! Browser glue: environment probe, LocalStorage and the JS-facing handle

use wasm_bindgen::prelude::*;

use crate::clock::FrameClock;
use crate::consts::MIN_VIEWPORT_DIM;
use crate::game::Game;
use crate::hud;
use crate::input::{InputEvent, Key, PointerKind};
use crate::persistence::{Storage, StorageError};
use crate::settings::Settings;
use crate::sim::{SimRng, StepOutcome, autopilot_wants_jump};
use crate::tuning::Environment;

fn js_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

/// `window.localStorage`, if the page is allowed to use it
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("localStorage unavailable, best score will not persist");
        }
        Self { inner }
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.inner {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.inner {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Err(StorageError::Backend("localStorage unavailable".into())),
        }
    }
}

fn media_matches(window: &web_sys::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Read the viewport size and pointer capabilities of the current window
pub fn probe_environment() -> Environment {
    let Some(window) = web_sys::window() else {
        return Environment::probe(MIN_VIEWPORT_DIM, MIN_VIEWPORT_DIM, false);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Environment {
        width,
        height,
        coarse_pointer: media_matches(&window, "(pointer: coarse)"),
        narrow_viewport: media_matches(&window, "(max-width: 820px)"),
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Jump Kiwing starting...");
}

/// Simulation handle for the page's frame loop.
///
/// JS calls `frame(timestamp)` from `requestAnimationFrame`, then reads the
/// accessors to draw.
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
    clock: FrameClock,
    attract: bool,
}

impl WebGame {
    fn handle(&mut self, event: InputEvent) -> bool {
        let jump = event.is_jump_trigger();
        self.game.handle_event(event);
        jump
    }
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let storage = LocalStorage::open();
        let settings = Settings::load(&storage);
        let seed = settings
            .seed
            .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
        log::info!("Game initialized with seed: {seed}");
        let game = Game::with_rng(settings, probe_environment(), storage, SimRng::new(seed));
        WebGame {
            game,
            clock: FrameClock::default(),
            attract: false,
        }
    }

    /// Call from the window `resize` listener
    pub fn resize(&mut self) {
        self.game.resize(probe_environment());
    }

    /// Forward a `keydown` (`KeyboardEvent.code`); returns true if it was a jump
    pub fn key_down(&mut self, code: &str) -> bool {
        self.handle(InputEvent::KeyDown {
            key: Key::from_code(code),
        })
    }

    /// Forward a `pointerdown`; returns true if it was a jump
    pub fn pointer_down(&mut self, button: i16, pointer_type: &str) -> bool {
        self.handle(InputEvent::PointerDown {
            button,
            pointer: PointerKind::from_type(pointer_type),
        })
    }

    /// The start / restart button on the overlay
    pub fn start(&mut self) {
        if self.game.state().game_over() {
            self.game.reset_game();
        }
        self.game.start_game();
    }

    /// Let the autopilot take over jumping during runs
    pub fn set_attract_mode(&mut self, on: bool) {
        self.attract = on;
    }

    /// Forget the frame timestamp, e.g. when the tab becomes visible again
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Advance one frame. Returns 0 idle, 1 running, 2 just collided.
    pub fn frame(&mut self, timestamp_ms: f64) -> u8 {
        if self.attract && autopilot_wants_jump(self.game.state()) {
            self.game.request_jump();
        }
        let dt = self.clock.tick(timestamp_ms);
        match self.game.frame(dt) {
            StepOutcome::Idle => 0,
            StepOutcome::Advanced => 1,
            StepOutcome::Collided { .. } => 2,
        }
    }

    pub fn width(&self) -> f32 {
        self.game.viewport().width
    }

    pub fn height(&self) -> f32 {
        self.game.viewport().height
    }

    pub fn ground_y(&self) -> f32 {
        self.game.viewport().ground_y
    }

    pub fn scroll(&self) -> f32 {
        self.game.state().scroll
    }

    pub fn time(&self) -> f32 {
        self.game.state().time
    }

    pub fn running(&self) -> bool {
        self.game.state().running()
    }

    pub fn game_over(&self) -> bool {
        self.game.state().game_over()
    }

    pub fn score_text(&self) -> String {
        hud::score_text(self.game.state().score)
    }

    pub fn padded_score(&self) -> String {
        hud::padded_score(self.game.state().score)
    }

    pub fn padded_best(&self) -> String {
        hud::padded_score(self.game.state().best_score)
    }

    /// Overlay button label, empty while playing
    pub fn button_label(&self) -> String {
        hud::OverlayMode::for_phase(self.game.phase())
            .button_label()
            .unwrap_or_default()
            .to_string()
    }

    /// Results ladder as "LABEL SCORE" lines
    pub fn ladder(&self) -> String {
        let state = self.game.state();
        hud::ranking_ladder(state.score, state.best_score)
            .iter()
            .map(|e| format!("{} {:05}", e.label, e.score))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Player box as [x, y, width, height]
    pub fn player(&self) -> Vec<f32> {
        let p = &self.game.state().player;
        vec![p.x, p.y, p.width, p.height]
    }

    /// Obstacles flattened as [x, y, width, height, hue] per obstacle
    pub fn obstacles(&self) -> Vec<f32> {
        self.game
            .state()
            .obstacles
            .iter()
            .flat_map(|o| [o.x, o.y, o.width, o.height, o.tint.hue])
            .collect()
    }

    /// CSS fill for the obstacle at `index`
    pub fn obstacle_color(&self, index: usize) -> Option<String> {
        self.game
            .state()
            .obstacles
            .get(index)
            .map(|o| o.tint.css())
    }
}
