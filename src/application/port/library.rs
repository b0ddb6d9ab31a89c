// SPDX-License-Identifier: MPL-2.0
//! Photo library port definition.
//!
//! [`PhotoLibrary`] is the single seam between the swipe logic and wherever
//! photos actually live. It combines the asset provider (permission, fetch,
//! image resolution) with the deletion gateway.
//!
//! # Async contract
//!
//! Operations that may suspend (asking the user, decoding, deleting) return
//! boxed `'static + Send` futures so callers can hand them to
//! `iced::Task::perform` and receive the result back on the update loop.
//! Status checks and the fetch are synchronous; callers that must not block
//! wrap them in `spawn_blocking`.

use crate::domain::{Authorization, PhotoHandle, ResolvedImage, TargetSize};
use crate::error::LibraryError;
use futures_util::future::BoxFuture;

/// Result type for library operations.
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

/// Access to a photo library.
pub trait PhotoLibrary: Send + Sync {
    /// Returns the current permission status without prompting.
    fn authorization_status(&self) -> Authorization;

    /// Prompts the user for access.
    ///
    /// Resolves to [`Authorization::Authorized`] or [`Authorization::Denied`],
    /// never [`Authorization::NotDetermined`].
    fn request_authorization(&self) -> BoxFuture<'static, Authorization>;

    /// Lists every image asset, newest creation date first.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::PermissionDenied`] when access has not been
    /// granted, or an I/O error if the library cannot be enumerated.
    fn fetch_image_assets(&self) -> LibraryResult<Vec<PhotoHandle>>;

    /// Resolves a displayable bitmap (and its blurred backdrop) for `handle`.
    fn resolve_image(
        &self,
        handle: PhotoHandle,
        size: TargetSize,
    ) -> BoxFuture<'static, LibraryResult<ResolvedImage>>;

    /// Irreversibly removes the given assets from the library.
    ///
    /// The request fails as a whole if any asset cannot be removed; assets
    /// removed before the failure stay removed.
    fn delete_assets(&self, handles: Vec<PhotoHandle>) -> BoxFuture<'static, LibraryResult<()>>;
}
