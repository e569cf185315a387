//! Durable client settings.
//!
//! The display theme is the only value that survives a restart. It lives in
//! a small JSON key-value file under the user data directory; tests use the
//! in-memory store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "supplychain-theme";

/// Display theme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value, falling back to dark for anything unknown.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Key-value settings storage.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Read the persisted theme, defaulting to dark.
pub fn load_theme(store: &dyn SettingsStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

/// Persist the current theme under its well-known key.
pub fn persist_theme(store: &dyn SettingsStore, theme: Theme) -> Result<(), SettingsError> {
    store.put(THEME_KEY, theme.as_str())
}

/// JSON-file-backed store under the user data directory.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/kirana/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("kirana").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> HashMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_values_fall_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("mauve")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = FileSettingsStore::new(&path);
        assert_eq!(load_theme(&store), Theme::Dark);

        persist_theme(&store, Theme::Light).unwrap();

        // A fresh handle sees the persisted value, as after a reload.
        let reopened = FileSettingsStore::new(&path);
        assert_eq!(load_theme(&reopened), Theme::Light);
    }

    #[test]
    fn put_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        store.put("other", "value").unwrap();
        persist_theme(&store, Theme::Light).unwrap();

        assert_eq!(store.get("other").as_deref(), Some("value"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }
}
