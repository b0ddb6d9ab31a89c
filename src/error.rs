// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Library(LibraryError),
}

/// Failures reported by a photo library adapter.
///
/// Each variant maps to an i18n key so the UI can present a localized
/// message when it chooses to surface the failure at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The asset no longer exists in the library.
    NotFound,

    /// The library refused access (consent denied or OS-level permission).
    PermissionDenied,

    /// The asset exists but could not be decoded into a bitmap.
    Decode(String),

    /// Any other I/O failure while reading or changing the library.
    Io(String),

    /// The background task carrying the request was dropped before finishing.
    Cancelled,
}

impl LibraryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LibraryError::NotFound => "error-library-not-found",
            LibraryError::PermissionDenied => "error-library-permission-denied",
            LibraryError::Decode(_) => "error-library-decode",
            LibraryError::Io(_) => "error-library-io",
            LibraryError::Cancelled => "error-library-cancelled",
        }
    }

    /// Classifies a standard I/O error into a library error.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LibraryError::NotFound,
            std::io::ErrorKind::PermissionDenied => LibraryError::PermissionDenied,
            _ => LibraryError::Io(err.to_string()),
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound => write!(f, "Asset not found"),
            LibraryError::PermissionDenied => write!(f, "Access to the photo library was denied"),
            LibraryError::Decode(msg) => write!(f, "Decode failed: {}", msg),
            LibraryError::Io(msg) => write!(f, "I/O error: {}", msg),
            LibraryError::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for LibraryError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Library(e) => write!(f, "Library Error: {}", e),
        }
    }
}

impl From<LibraryError> for Error {
    fn from(err: LibraryError) -> Self {
        Error::Library(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn library_error_wraps_into_error() {
        let err: Error = LibraryError::NotFound.into();
        assert_eq!(format!("{}", err), "Library Error: Asset not found");
    }

    #[test]
    fn library_error_from_io_classifies_kind() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(LibraryError::from_io(&missing), LibraryError::NotFound);

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert_eq!(LibraryError::from_io(&denied), LibraryError::PermissionDenied);

        let other = std::io::Error::other("disk on fire");
        assert!(matches!(LibraryError::from_io(&other), LibraryError::Io(msg) if msg.contains("fire")));
    }

    #[test]
    fn library_error_i18n_keys() {
        assert_eq!(LibraryError::NotFound.i18n_key(), "error-library-not-found");
        assert_eq!(
            LibraryError::Decode("bad".into()).i18n_key(),
            "error-library-decode"
        );
        assert_eq!(
            LibraryError::PermissionDenied.i18n_key(),
            "error-library-permission-denied"
        );
    }
}
