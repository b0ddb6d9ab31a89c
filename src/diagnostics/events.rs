// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::Authorization;
use crate::error::LibraryError;

/// User-initiated actions worth correlating with later failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Card released past the right threshold.
    SwipeDelete,
    /// Card released past the left threshold.
    SwipeSkip,
    /// Card released inside the thresholds and snapped back.
    SwipeCancel,
    /// Permission alert acknowledged.
    DismissAlert,
    /// "Check again" pressed on the empty library screen.
    RetryLoad,
}

/// Application state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The library reported a permission status (initial check or answer).
    AuthorizationDecided { status: Authorization },
    /// The asset list arrived.
    PhotosFetched { count: usize },
    /// A deferred deletion was handed to the library.
    DeletionRequested,
    /// The library confirmed a deletion.
    DeletionSucceeded { remaining: usize },
}

/// Categories of warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Settings or persisted state could not be read or written.
    ConfigurationIssue,
    /// The library refused access.
    PermissionDenied,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Listing the library failed.
    FetchError,
    /// Removing an asset failed.
    DeleteError,
    /// Decoding an asset for display failed.
    DecodeError,
    /// Other error type not covered by specific categories.
    Other,
}

impl ErrorType {
    /// Refines `fallback` for library errors that have a more precise category.
    #[must_use]
    pub fn for_library_error(error: &LibraryError, fallback: ErrorType) -> Self {
        match error {
            LibraryError::Decode(_) => ErrorType::DecodeError,
            _ => fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}
