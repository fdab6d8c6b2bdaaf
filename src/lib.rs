//! Jump Kiwing - A side-scrolling obstacle-jumping runner
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance (desktop / mobile presets)
//! - `game`: Owned session context tying simulation, input and storage together
//! - `input`: Jump latch and raw input filtering
//! - `clock`: Frame timestamp to clamped `dt`
//! - `persistence`: Best score storage
//! - `platform`: Browser glue (environment probe, LocalStorage, JS handle)
//!
//! Rendering and DOM overlays live outside this crate; they read the state
//! exposed by [`Game`] once per frame.

pub mod clock;
pub mod game;
pub mod hud;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{PresetChoice, Settings, UnknownPreset};
pub use tuning::{Environment, TuningConfig, resolve_tuning};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed into the simulation (~30 fps)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Viewports narrower than this (CSS px) use the mobile preset
    pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 820.0;
    /// Smallest accepted viewport dimension
    pub const MIN_VIEWPORT_DIM: f32 = 1.0;

    /// Player box as a fraction of min(width, height), before player_scale
    pub const PLAYER_WIDTH_RATIO: f32 = 0.05;
    pub const PLAYER_HEIGHT_RATIO: f32 = 0.07;
    /// Player box bounds, before player_scale
    pub const PLAYER_MIN_WIDTH: f32 = 36.0;
    pub const PLAYER_MAX_WIDTH: f32 = 62.0;
    pub const PLAYER_MIN_HEIGHT: f32 = 48.0;
    pub const PLAYER_MAX_HEIGHT: f32 = 82.0;

    /// Obstacle width range as a fraction of viewport width
    pub const OBSTACLE_WIDTH_RATIO: (f32, f32) = (0.04, 0.07);
    /// Obstacle height range as a fraction of viewport height
    pub const OBSTACLE_HEIGHT_RATIO: (f32, f32) = (0.06, 0.12);
    /// Obstacle size bounds, before obstacle_scale
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 60.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 92.0;
    /// Obstacle hue band (degrees)
    pub const OBSTACLE_HUE: (f32, f32) = (24.0, 32.0);

    /// Obstacles are culled once their right edge reaches this x
    pub const CULL_X: f32 = -20.0;

    /// Speed at which spawn delays are unscaled
    pub const SPAWN_REFERENCE_SPEED: f32 = 420.0;
    /// Bounds of the speed-dependent spawn delay multiplier
    pub const SPAWN_FACTOR_MIN: f32 = 0.6;
    pub const SPAWN_FACTOR_MAX: f32 = 1.2;

    /// Background drift while not running, as a fraction of base speed
    pub const IDLE_SCROLL_FACTOR: f32 = 0.35;
    /// Score per pixel travelled
    pub const SCORE_RATE: f32 = 0.06;

    /// Hitbox inset on each side of the player box
    pub const HITBOX_PAD_DESKTOP: f32 = 12.0;
    pub const HITBOX_PAD_MOBILE: f32 = 6.0;
}
