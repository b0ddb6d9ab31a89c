// SPDX-License-Identifier: MPL-2.0
//! Photo identity and pixel data.
//!
//! A [`PhotoHandle`] names an asset in the library without carrying its
//! pixels; a [`RawImage`] carries pixels without knowing where they came
//! from. The presentation layer turns the latter into Iced image handles.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opaque reference to an image stored in the photo library.
///
/// Handles are compared by identity: two handles are equal when they name
/// the same asset. Cloning is cheap (shared allocation).
///
/// # Example
///
/// ```
/// use photo_swipe::domain::PhotoHandle;
///
/// let a = PhotoHandle::new("/photos/a.jpg");
/// let b = a.clone();
/// assert_eq!(a, b);
/// assert_eq!(a.file_name(), Some("a.jpg"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PhotoHandle(Arc<Path>);

impl PhotoHandle {
    /// Creates a handle from the asset's library location.
    #[must_use]
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self(Arc::from(location.into().into_boxed_path()))
    }

    /// Returns the library location this handle refers to.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.0
    }

    /// Returns the file name component, if it is valid UTF-8.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }
}

impl fmt::Debug for PhotoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PhotoHandle").field(&self.0).finish()
    }
}

impl fmt::Display for PhotoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Raw RGBA pixel data without presentation dependencies.
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA bytes, row-major, 4 bytes per pixel.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// A photo resolved for display: the card bitmap and its blurred backdrop.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub card: RawImage,
    pub backdrop: RawImage,
}

/// Target display size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
