//! User preference persistence for the Samix TUI.
//!
//! A tiny JSON-backed store recording lightweight configuration such as the
//! preferred theme. The file lives in the standard configuration directory
//! (`~/.config/samix/preferences.json` on most platforms); an internal
//! `Mutex` makes the store safe to share.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "SAMIX_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected via the TUI.
    pub preferred_theme: Option<String>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store rooted at the default config directory path (or the
    /// `SAMIX_PREFERENCES_PATH` override).
    pub fn new() -> Result<Self, PreferencesError> {
        let resolved_path = default_preferences_path();
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.preferred_theme = theme_id;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("samix")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_round_trips_without_touching_disk() {
        let prefs = UserPreferences::ephemeral();
        assert!(prefs.preferred_theme().is_none());
        prefs.set_preferred_theme(Some("aurora".into())).expect("set theme");
        assert_eq!(prefs.preferred_theme().as_deref(), Some("aurora"));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn corrupt_payload_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{not json").expect("write corrupt payload");
        let payload = load_payload(&path).expect("load");
        assert!(payload.preferred_theme.is_none());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let payload = load_payload(&dir.path().join("absent.json")).expect("load");
        assert!(payload.preferred_theme.is_none());
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = PreferencesPayload {
            preferred_theme: Some("ansi".into()),
        };
        let json = serde_json::to_string(&payload).expect("serialize");
        let back: PreferencesPayload = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.preferred_theme.as_deref(), Some("ansi"));
    }
}
