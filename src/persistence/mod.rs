//! Key/value persistence
//!
//! The game only ever stores two things: the best score (a single number)
//! and the player's settings. Backends mirror the browser LocalStorage API:
//! - `MemoryStorage` for tests and headless runs
//! - `FileStorage` (native) backed by a small JSON file
//! - `platform::LocalStorage` (wasm32)

use std::collections::BTreeMap;

use thiserror::Error;

/// Storage key of the best score
pub const BEST_SCORE_KEY: &str = "jump-kiwing-best";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// LocalStorage-shaped key/value store
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

/// Parse a stored best score. Missing, non-numeric, negative or non-finite
/// values read as 0.
pub fn parse_best_score(raw: Option<&str>) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Load the best score, falling back to 0 on any storage failure
pub fn load_best_score(storage: &dyn Storage) -> f32 {
    match storage.get_item(BEST_SCORE_KEY) {
        Ok(raw) => {
            let best = parse_best_score(raw.as_deref());
            log::info!("Loaded best score {best:.0}");
            best
        }
        Err(e) => {
            log::warn!("Could not read best score: {e}");
            0.0
        }
    }
}

/// Persist the best score
pub fn save_best_score(storage: &mut dyn Storage, best: f32) -> Result<(), StorageError> {
    storage.set_item(BEST_SCORE_KEY, &best.to_string())
}
