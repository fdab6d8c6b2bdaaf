//! Platform abstraction layer
//!
//! Browser builds get:
//! - Environment probe (`matchMedia`, window size)
//! - `LocalStorage` backend for `persistence::Storage`
//! - `WebGame`, the handle a JS frame loop and renderer drive
//!
//! Native builds construct `Environment` and storage directly.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorage, WebGame, probe_environment};
