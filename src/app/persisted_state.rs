// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! State that must survive a restart but is not a user preference lives
//! here, separate from `settings.toml`. Today that is only the per-library
//! consent decision.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `PHOTO_SWIPE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::port::ConsentStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Library roots the user has answered the access prompt for.
    #[serde(default)]
    pub library_consent: BTreeMap<PathBuf, bool>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns `(state, warning_key)`. On failure the state is the default
    /// and the key names the problem for a notification banner.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to `base_dir` (or the default location),
    /// creating the directory if needed.
    ///
    /// Returns a warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|path| path.join(STATE_FILE))
    }
}

/// [`ConsentStore`] backed by `state.cbor`.
///
/// Every recorded decision is written through immediately.
#[derive(Debug)]
pub struct PersistedConsent {
    state: Mutex<AppState>,
    base_dir: Option<PathBuf>,
}

impl PersistedConsent {
    /// Wraps already-loaded state that saves to the default location.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self::with_base_dir(state, None)
    }

    /// Wraps state that saves into `base_dir` instead of the default.
    #[must_use]
    pub fn with_base_dir(state: AppState, base_dir: Option<PathBuf>) -> Self {
        Self {
            state: Mutex::new(state),
            base_dir,
        }
    }
}

impl ConsentStore for PersistedConsent {
    fn consent_for(&self, root: &Path) -> Option<bool> {
        let state = self.state.lock().ok()?;
        state.library_consent.get(root).copied()
    }

    fn record_consent(&self, root: &Path, granted: bool) -> Option<String> {
        let Ok(mut state) = self.state.lock() else {
            return Some("notification-state-write-error".to_string());
        };
        state.library_consent.insert(root.to_path_buf(), granted);
        state.save_to(self.base_dir.clone())
    }
}
