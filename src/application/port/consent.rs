// SPDX-License-Identifier: MPL-2.0
//! Consent storage port.
//!
//! Library adapters that have to ask the user for access remember the
//! answer through this trait, keyed by library root.

use std::path::Path;

/// Remembers per-library access decisions.
pub trait ConsentStore: Send + Sync {
    /// Returns the recorded decision for `root`, or `None` if never asked.
    fn consent_for(&self, root: &Path) -> Option<bool>;

    /// Records a decision.
    ///
    /// Returns an i18n warning key if the decision could not be persisted.
    /// The decision still applies for the current session.
    fn record_consent(&self, root: &Path, granted: bool) -> Option<String>;
}

/// A [`ConsentStore`] that forgets everything on exit.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct InMemoryConsent {
    decisions: std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, bool>>,
}

#[cfg(test)]
impl InMemoryConsent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a decision already recorded for `root`.
    pub(crate) fn with_decision(root: impl Into<std::path::PathBuf>, granted: bool) -> Self {
        let store = Self::default();
        if let Ok(mut decisions) = store.decisions.lock() {
            decisions.insert(root.into(), granted);
        }
        store
    }
}

#[cfg(test)]
impl ConsentStore for InMemoryConsent {
    fn consent_for(&self, root: &Path) -> Option<bool> {
        self.decisions
            .lock()
            .ok()
            .and_then(|decisions| decisions.get(root).copied())
    }

    fn record_consent(&self, root: &Path, granted: bool) -> Option<String> {
        match self.decisions.lock() {
            Ok(mut decisions) => {
                decisions.insert(root.to_path_buf(), granted);
                None
            }
            Err(_) => Some("notification-state-write-error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_root_has_no_decision() {
        let store = InMemoryConsent::new();
        assert_eq!(store.consent_for(Path::new("/photos")), None);
    }

    #[test]
    fn recorded_decision_is_returned_per_root() {
        let store = InMemoryConsent::new();
        assert!(store.record_consent(Path::new("/photos"), true).is_none());
        assert!(store.record_consent(Path::new("/other"), false).is_none());
        assert_eq!(store.consent_for(Path::new("/photos")), Some(true));
        assert_eq!(store.consent_for(Path::new("/other")), Some(false));
    }

    #[test]
    fn with_decision_preloads_store() {
        let store = InMemoryConsent::with_decision("/photos", false);
        assert_eq!(store.consent_for(Path::new("/photos")), Some(false));
    }
}
