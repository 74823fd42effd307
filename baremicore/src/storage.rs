//! Start-up settings
//!
//! Read once from `settings.json` in the platform config directory. The
//! calculator state itself is never stored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::locale::Language;
use crate::palette::ThemeMode;
use crate::presets::{self, Preset};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language shown at start-up.
    pub language: Language,
    /// Fixed theme; `None` follows the system.
    pub theme: Option<ThemeMode>,
    /// Preset magnitudes; invalid entries are dropped.
    pub presets: Vec<f64>,
    /// tracing filter directive, overridden by `BAREMI_LOG`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: None,
            presets: presets::DEFAULT_PRESETS.to_vec(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        config_dir("baremi").join("settings.json")
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::or_default(path, Self::load(path))
    }

    /// Missing file means defaults; any other failure is logged.
    pub fn or_default(path: &Path, loaded: Result<Self>) -> Self {
        match loaded {
            Ok(settings) => {
                debug!(path = %path.display(), "settings loaded");
                settings
            }
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(error) => {
                warn!(path = %path.display(), %error, "unreadable settings, using defaults");
                Self::default()
            }
        }
    }

    /// Valid presets, falling back to the default set.
    pub fn preset_list(&self) -> Vec<Preset> {
        let (list, rejected) = presets::sanitize(&self.presets);
        if !rejected.is_empty() {
            warn!(?rejected, "ignoring invalid preset values");
        }
        list
    }

    /// Theme to start with, given the system's dark-mode flag.
    pub fn initial_theme(&self, system_dark: bool) -> ThemeMode {
        self.theme.unwrap_or(ThemeMode::from_dark(system_dark))
    }
}

/// Get the config directory for Baremi
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("app", "baremi", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "language": "en" }"#).unwrap();
        assert_eq!(s.language, Language::En);
        assert_eq!(s.theme, None);
        assert_eq!(s.presets, presets::DEFAULT_PRESETS.to_vec());
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_full_json() {
        let s = Settings::from_json(
            r#"{ "language": "fa", "theme": "dark", "presets": [1, 2.5, -3], "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(s.initial_theme(false), ThemeMode::Dark);
        assert_eq!(
            s.preset_list(),
            vec![Preset { value: 1.0 }, Preset { value: 2.5 }]
        );
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn test_theme_follows_system_when_unset() {
        let s = Settings::default();
        assert_eq!(s.initial_theme(true), ThemeMode::Dark);
        assert_eq!(s.initial_theme(false), ThemeMode::Light);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ language: "),
            Err(StorageError::Json(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "theme": "sepia" }"#),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("baremi-test-missing").join("settings.json");
        assert!(matches!(Settings::load(&path), Err(StorageError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("baremi-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "theme": "light", "presets": [0.1] }"#).unwrap();
        let s = Settings::load_or_default(&path);
        assert_eq!(s.theme, Some(ThemeMode::Light));
        assert_eq!(s.preset_list(), vec![Preset { value: 0.1 }]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
