//! Config storage for padcalc
//!
//! JSON files under the platform config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a JSON document, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        width: f32,
        label: String,
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.json");
        let sample = Sample { width: 375.0, label: "calc".into() };

        save_json(&path, &sample).unwrap();
        let loaded: Sample = load_json(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(p) if p == path));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn config_dir_mentions_app_name() {
        let dir = config_dir("padcalc");
        let named = dir
            .components()
            .any(|c| c.as_os_str().to_string_lossy().contains("padcalc"));
        // Falls back to "." when no home directory is available.
        assert!(named || dir == PathBuf::from("."));
    }
}
