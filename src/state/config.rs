/// Widget settings
///
/// Stored as JSON so a host can keep them next to its own settings.
/// Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Default edge length of preview thumbnails, in pixels
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct UploadConfig {
    /// Skip incoming files whose name and type are already selected
    pub remove_redundants: bool,

    /// Show a plain "Upload Files" button instead of the drop zone.
    /// Fixed for the lifetime of the widget.
    pub disabled_drag_and_drop: bool,

    /// Longest edge of decoded image previews
    pub thumbnail_size: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            remove_redundants: true,
            disabled_drag_and_drop: false,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl UploadConfig {
    /// Convert to JSON string for storage
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(Self::from_json(&json)?)
    }

    /// Where the demo host looks for settings:
    /// - Linux: ~/.config/file-upload/config.json
    /// - macOS: ~/Library/Application Support/file-upload/config.json
    /// - Windows: %APPDATA%\file-upload\config.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("file-upload");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploadConfig::default();
        assert!(config.remove_redundants);
        assert!(!config.disabled_drag_and_drop);
        assert_eq!(config.thumbnail_size, DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = UploadConfig::from_json(r#"{ "disabled_drag_and_drop": true }"#).unwrap();
        assert!(config.disabled_drag_and_drop);
        assert!(config.remove_redundants);
        assert_eq!(config.thumbnail_size, DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn test_serialization() {
        let config = UploadConfig {
            remove_redundants: false,
            disabled_drag_and_drop: true,
            thumbnail_size: 128,
        };

        let json = config.to_json().unwrap();
        assert_eq!(UploadConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("file-upload-test-missing/config.json");
        assert_eq!(UploadConfig::load(&path).unwrap(), UploadConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let path = std::env::temp_dir().join(format!("file-upload-invalid-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();

        let result = UploadConfig::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
