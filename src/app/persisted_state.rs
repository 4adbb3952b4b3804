// SPDX-License-Identifier: MPL-2.0
//! The two persisted preference values: API key and album id.
//!
//! They are restored at startup to auto-load the last album and written
//! through whenever either changes. Storage is CBOR in the data directory,
//! behind a [`PreferenceStore`] capability so the application logic never
//! touches the filesystem directly and tests can substitute an in-memory
//! fake. Storage failure is never fatal: the store degrades to
//! in-memory-only operation and the caller logs the returned warning.

use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::Mutex;

const STATE_FILE: &str = "state.cbor";

/// Credentials remembered across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub album_id: Option<String>,
}

impl AppState {
    /// Whether both values are present and non-blank, i.e. the last album
    /// can be auto-loaded.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.api_key) && filled(&self.album_id)
    }
}

/// Fallible key-value persistence for [`AppState`].
///
/// Both operations return an optional warning instead of an error: a broken
/// store must never interrupt the user, only degrade to in-memory operation.
pub trait PreferenceStore {
    fn load(&self) -> (AppState, Option<String>);
    fn save(&self, state: &AppState) -> Option<String>;
}

/// Disk-backed store writing CBOR into the data directory.
#[derive(Debug, Default)]
pub struct DiskStore {
    /// Explicit base directory override (tests); `None` resolves through
    /// [`paths::data_dir`].
    base_dir: Option<PathBuf>,
}

impl DiskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    fn state_file_path(&self) -> Option<PathBuf> {
        paths::data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

impl PreferenceStore for DiskStore {
    fn load(&self) -> (AppState, Option<String>) {
        let Some(path) = self.state_file_path() else {
            return (AppState::default(), None);
        };
        if !path.exists() {
            return (AppState::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(error) => (
                    AppState::default(),
                    Some(format!("state file unreadable, starting fresh: {error}")),
                ),
            },
            Err(error) => (
                AppState::default(),
                Some(format!("cannot open state file: {error}")),
            ),
        }
    }

    fn save(&self, state: &AppState) -> Option<String> {
        let Some(path) = self.state_file_path() else {
            return Some("no data directory available, preferences kept in memory".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                return Some(format!("cannot create data directory: {error}"));
            }
        }

        match fs::File::create(&path) {
            Ok(file) => match ciborium::into_writer(state, BufWriter::new(file)) {
                Ok(()) => None,
                Err(error) => Some(format!("cannot write state file: {error}")),
            },
            Err(error) => Some(format!("cannot create state file: {error}")),
        }
    }
}

/// In-memory store for tests and for sessions where no data directory can
/// be resolved.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<AppState>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> (AppState, Option<String>) {
        (self.state.lock().expect("store poisoned").clone(), None)
    }

    fn save(&self, state: &AppState) -> Option<String> {
        *self.state.lock().expect("store poisoned") = state.clone();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_credentials() {
        let state = AppState::default();
        assert!(!state.has_credentials());
    }

    #[test]
    fn blank_values_do_not_count_as_credentials() {
        let state = AppState {
            api_key: Some("  ".to_string()),
            album_id: Some("album-1".to_string()),
        };
        assert!(!state.has_credentials());
    }

    #[test]
    fn disk_round_trip_preserves_state() {
        let dir = tempdir().expect("create temp dir");
        let store = DiskStore::with_base_dir(dir.path().to_path_buf());

        let original = AppState {
            api_key: Some("secret".to_string()),
            album_id: Some("790fa206".to_string()),
        };
        assert!(store.save(&original).is_none());

        let (loaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(loaded, original);
        assert!(loaded.has_credentials());
    }

    #[test]
    fn missing_file_loads_default_without_warning() {
        let dir = tempdir().expect("create temp dir");
        let store = DiskStore::with_base_dir(dir.path().to_path_buf());

        let (state, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupt_file_degrades_to_default_with_warning() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(STATE_FILE), "not cbor").expect("write file");
        let store = DiskStore::with_base_dir(dir.path().to_path_buf());

        let (state, warning) = store.load();
        assert!(warning.is_some());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_nested_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("deeply").join("nested");
        let store = DiskStore::with_base_dir(nested.clone());

        let state = AppState {
            api_key: Some("k".to_string()),
            album_id: None,
        };
        assert!(store.save(&state).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        let state = AppState {
            api_key: Some("k".to_string()),
            album_id: Some("a".to_string()),
        };
        assert!(store.save(&state).is_none());
        let (loaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }
}
