//! Player settings
//!
//! Persisted as JSON next to the best score. Every field has a default so
//! older or hand-edited settings still load.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError};
use crate::tuning::{Environment, TuningConfig, resolve_tuning};

/// Which tuning preset to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresetChoice {
    /// Pick from the environment on every resize
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl PresetChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetChoice::Auto => "auto",
            PresetChoice::Desktop => "desktop",
            PresetChoice::Mobile => "mobile",
        }
    }
}

/// Preset name that matches none of the known choices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetChoice {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PresetChoice::Auto),
            "desktop" | "pc" => Ok(PresetChoice::Desktop),
            "mobile" | "touch" => Ok(PresetChoice::Mobile),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Tuning preset selection
    pub preset: PresetChoice,
    /// Ceiling on the ramped run speed (None = unbounded)
    pub max_speed: Option<f32>,
    /// Fixed RNG seed for reproducible runs (None = random per session)
    pub seed: Option<u64>,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "jump-kiwing-settings";

    /// Resolve the tuning for `env` with these settings applied
    pub fn tuning_for(&self, env: &Environment) -> TuningConfig {
        let mut tuning = match self.preset {
            PresetChoice::Auto => resolve_tuning(env),
            PresetChoice::Desktop => TuningConfig::desktop(),
            PresetChoice::Mobile => TuningConfig::mobile(),
        };
        tuning.max_speed = self.max_speed.filter(|s| s.is_finite() && *s > 0.0);
        tuning
    }

    /// Load settings, falling back to defaults on missing or bad data
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings: {e}");
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.preset, PresetChoice::Auto);
        assert_eq!(s.max_speed, None);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            preset: PresetChoice::Mobile,
            max_speed: Some(540.0),
            seed: Some(7),
        };
        settings.save(&mut storage).unwrap();
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_partial_and_invalid_json() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(Settings::STORAGE_KEY, r#"{"preset":"desktop"}"#)
            .unwrap();
        let s = Settings::load(&storage);
        assert_eq!(s.preset, PresetChoice::Desktop);
        assert_eq!(s.max_speed, None);

        storage.set_item(Settings::STORAGE_KEY, "not json").unwrap();
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn test_tuning_for() {
        let narrow = Environment::probe(400.0, 800.0, false);
        assert!(Settings::default().tuning_for(&narrow).is_mobile);

        let forced = Settings {
            preset: PresetChoice::Desktop,
            max_speed: Some(600.0),
            ..Default::default()
        };
        let t = forced.tuning_for(&narrow);
        assert!(!t.is_mobile);
        assert_eq!(t.max_speed, Some(600.0));

        let bogus = Settings {
            max_speed: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(bogus.tuning_for(&narrow).max_speed, None);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Mobile".parse::<PresetChoice>(), Ok(PresetChoice::Mobile));
        assert_eq!("pc".parse::<PresetChoice>(), Ok(PresetChoice::Desktop));
        assert_eq!(
            "tablet".parse::<PresetChoice>(),
            Err(UnknownPreset("tablet".into()))
        );
        assert_eq!(PresetChoice::Auto.as_str(), "auto");
    }
}
