//! Calculator settings
//!
//! Read from `calculator.json` in the padcalc config directory. Missing
//! fields take their defaults; a missing or broken file means all defaults.

use padcore::storage::{self, config_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub resizable: bool,
    /// Characters of the current term shown on the display.
    pub display_chars: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            window_width: 375.0,
            window_height: 667.0,
            resizable: false,
            display_chars: 11,
        }
    }
}

impl CalcConfig {
    pub fn config_path() -> PathBuf {
        config_dir("padcalc").join("calculator.json")
    }

    /// Load the user's config. The first run writes the defaults out so
    /// there is a file to edit.
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path);
        }
        let config = Self::default();
        if let Err(err) = config.save_to(&path) {
            debug!(path = %path.display(), %err, "could not write default config");
        }
        config
    }

    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<CalcConfig>(path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(StorageError::NotFound(_)) => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalcConfig::load_from(&dir.path().join("calculator.json"));
        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculator.json");
        std::fs::write(&path, r#"{ "display_chars": 16 }"#).unwrap();

        let config = CalcConfig::load_from(&path);
        assert_eq!(config.display_chars, 16);
        assert_eq!(config.window_width, 375.0);
        assert!(!config.resizable);
    }

    #[test]
    fn broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculator.json");
        std::fs::write(&path, "display_chars = 16").unwrap();
        assert_eq!(CalcConfig::load_from(&path), CalcConfig::default());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padcalc").join("calculator.json");
        let config = CalcConfig {
            resizable: true,
            window_height: 700.0,
            ..CalcConfig::default()
        };
        config.save_to(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["resizable"], serde_json::Value::Bool(true));
        assert_eq!(CalcConfig::load_from(&path), config);
    }
}
