// EssaySort - platform/prefs.rs
//
// File-backed preference store: a flat JSON object of string values in
// the platform data directory.
//
// - Every write saves the whole map atomically (write temp, rename).
// - A missing, unreadable or malformed file loads as an empty store;
//   preferences are a convenience and never block startup.

use crate::core::theme::PreferenceStore;
use crate::platform::fs::write_atomic;
use crate::util::error::PreferenceError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable key-value store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, loading any existing values.
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            values: load(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> BTreeMap<String, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            // "Not found" is the normal first run.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read preferences");
            }
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(values) => {
            tracing::debug!(path = %path.display(), "Preferences loaded");
            values
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Preference file is malformed; starting fresh"
            );
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&self.values).map_err(|e| PreferenceError::Json {
            path: self.path.clone(),
            source: e,
        })?;
        write_atomic(&self.path, json.as_bytes()).map_err(|e| PreferenceError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), key, "Preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_reopen_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = FilePreferenceStore::open(&path);
        assert_eq!(store.get("essay.theme"), None);
        store.set("essay.theme", "dark").unwrap();

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get("essay.theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, b"not json {{").unwrap();
        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get("essay.theme"), None);
    }

    #[test]
    fn test_other_keys_are_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, br#"{"other": "1"}"#).unwrap();
        let mut store = FilePreferenceStore::open(&path);
        store.set("essay.theme", "light").unwrap();
        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get("other").as_deref(), Some("1"));
        assert_eq!(reopened.get("essay.theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_unwritable_location_reports_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = FilePreferenceStore::open(&blocker.join("preferences.json"));
        let result = store.set("essay.theme", "dark");
        assert!(matches!(result, Err(PreferenceError::Io { .. })));
        // The in-memory value still reflects the latest choice.
        assert_eq!(store.get("essay.theme").as_deref(), Some("dark"));
    }
}
