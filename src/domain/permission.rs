// SPDX-License-Identifier: MPL-2.0
//! Library access permission.

use serde::{Deserialize, Serialize};

/// Whether the user has allowed the application to browse and change the
/// photo library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Authorization {
    /// Access granted; photos may be fetched and deleted.
    Authorized,
    /// Access refused, either by the user or by the operating system.
    Denied,
    /// The user has not been asked yet.
    NotDetermined,
}

impl Authorization {
    /// Returns `true` when photos may be fetched.
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Authorization::Authorized)
    }

    /// Maps a yes/no answer from the user to an authorization.
    #[must_use]
    pub fn from_answer(granted: bool) -> Self {
        if granted {
            Authorization::Authorized
        } else {
            Authorization::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_authorized_is_granted() {
        assert!(Authorization::Authorized.is_granted());
        assert!(!Authorization::Denied.is_granted());
        assert!(!Authorization::NotDetermined.is_granted());
    }

    #[test]
    fn answer_never_yields_not_determined() {
        assert_eq!(Authorization::from_answer(true), Authorization::Authorized);
        assert_eq!(Authorization::from_answer(false), Authorization::Denied);
    }
}
