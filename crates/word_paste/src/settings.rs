//! Paste settings management
//!
//! Settings are stored as JSON. Missing fields take their defaults, and a
//! file that fails to parse is logged and replaced by defaults rather than
//! blocking a paste.

use crate::{ListStyle, Result, PLACEHOLDER_TEXT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for normalizing and rendering pasted lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizerSettings {
    /// Text substituted for items with no meaningful content
    pub placeholder: String,
    /// Markup applied when items are rendered back into a list
    pub list_style: ListStyle,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_TEXT.to_string(),
            list_style: ListStyle::default(),
        }
    }
}

/// A JSON settings file on disk
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, or use defaults if the file doesn't exist or can't be
    /// parsed. Only a failed read of an existing file is an error.
    pub fn load_sync(&self) -> Result<NormalizerSettings> {
        if !self.path.exists() {
            tracing::debug!("no paste settings at {}, using defaults", self.path.display());
            return Ok(NormalizerSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<NormalizerSettings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse paste settings {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                Ok(NormalizerSettings::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SettingsError;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = NormalizerSettings::default();
        assert_eq!(settings.placeholder, "Text");
        assert_eq!(settings.list_style, ListStyle::default());
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = NormalizerSettings {
            placeholder: "Punkt".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: NormalizerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: NormalizerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, NormalizerSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let file = SettingsFile::new(temp_dir.path().join("word_paste.json"));
        assert_eq!(file.load_sync().unwrap(), NormalizerSettings::default());
    }

    #[test]
    fn test_load_sync_reads_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word_paste.json");
        std::fs::write(&path, r#"{"placeholder": "Eintrag"}"#).unwrap();

        let file = SettingsFile::new(&path);
        assert_eq!(file.path(), path.as_path());

        let settings = file.load_sync().unwrap();
        assert_eq!(settings.placeholder, "Eintrag");
        assert_eq!(settings.list_style, ListStyle::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let settings = SettingsFile::new(&path).load_sync().unwrap();
        assert_eq!(settings, NormalizerSettings::default());
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            SettingsFile::new(temp_dir.path()).load_sync(),
            Err(SettingsError::Io(_))
        ));
    }
}
