// SPDX-License-Identifier: MPL-2.0
//! Directory-backed photo library.
//!
//! [`FsPhotoLibrary`] treats a directory tree as the photo library. Access
//! is gated by an explicit per-root consent the user gives once through a
//! native dialog; the decision is remembered in a [`ConsentStore`].
//!
//! Decoding and deletion run on tokio's blocking pool.

pub mod decode;
pub mod scan;

use crate::application::port::{ConsentStore, LibraryResult, PhotoLibrary};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::domain::display::BlurSigma;
use crate::domain::{Authorization, PhotoHandle, ResolvedImage, TargetSize};
use crate::error::LibraryError;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Asks the user whether the library at the given root may be used.
pub type ConsentPrompt = Arc<dyn Fn(PathBuf) -> BoxFuture<'static, bool> + Send + Sync>;

/// Builds a [`ConsentPrompt`] that shows a native yes/no dialog.
///
/// `description` is shown above the library path.
#[must_use]
pub fn native_consent_prompt(title: String, description: String) -> ConsentPrompt {
    Arc::new(move |root: PathBuf| {
        let title = title.clone();
        let description = format!("{description}\n\n{}", root.display());
        async move {
            let answer = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await;
            matches!(answer, rfd::MessageDialogResult::Yes)
        }
        .boxed()
    })
}

pub struct FsPhotoLibrary {
    root: PathBuf,
    recursive: bool,
    blur: BlurSigma,
    consent: Arc<dyn ConsentStore>,
    prompt: ConsentPrompt,
    diagnostics: Option<DiagnosticsHandle>,
}

impl fmt::Debug for FsPhotoLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsPhotoLibrary")
            .field("root", &self.root)
            .field("recursive", &self.recursive)
            .field("blur", &self.blur)
            .finish_non_exhaustive()
    }
}

impl FsPhotoLibrary {
    /// Creates a recursive library rooted at `root` with the default blur.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, consent: Arc<dyn ConsentStore>, prompt: ConsentPrompt) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            blur: BlurSigma::default(),
            consent,
            prompt,
            diagnostics: None,
        }
    }

    /// Reports consent that could not be saved to `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn with_backdrop_blur(mut self, blur: BlurSigma) -> Self {
        self.blur = blur;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Combines the stored decision with whether the root is still readable.
fn status_for(consent: &dyn ConsentStore, root: &Path) -> Authorization {
    match consent.consent_for(root) {
        None => Authorization::NotDetermined,
        Some(false) => Authorization::Denied,
        Some(true) if fs::read_dir(root).is_ok() => Authorization::Authorized,
        Some(true) => Authorization::Denied,
    }
}

impl PhotoLibrary for FsPhotoLibrary {
    fn authorization_status(&self) -> Authorization {
        status_for(self.consent.as_ref(), &self.root)
    }

    fn request_authorization(&self) -> BoxFuture<'static, Authorization> {
        let root = self.root.clone();
        let consent = Arc::clone(&self.consent);
        let diagnostics = self.diagnostics.clone();
        let answer = (self.prompt)(root.clone());

        async move {
            let granted = answer.await;
            if let (Some(key), Some(diagnostics)) =
                (consent.record_consent(&root, granted), diagnostics)
            {
                diagnostics.log_warning(WarningEvent::new(WarningType::ConfigurationIssue, key));
            }
            status_for(consent.as_ref(), &root)
        }
        .boxed()
    }

    fn fetch_image_assets(&self) -> LibraryResult<Vec<PhotoHandle>> {
        if !self.authorization_status().is_granted() {
            return Err(LibraryError::PermissionDenied);
        }

        let paths = scan::scan_library(&self.root, self.recursive)
            .map_err(|err| LibraryError::from_io(&err))?;
        Ok(paths.into_iter().map(PhotoHandle::new).collect())
    }

    fn resolve_image(
        &self,
        handle: PhotoHandle,
        size: TargetSize,
    ) -> BoxFuture<'static, LibraryResult<ResolvedImage>> {
        let blur = self.blur;
        async move {
            tokio::task::spawn_blocking(move || decode::resolve(handle.location(), size, blur))
                .await
                .map_err(|_| LibraryError::Cancelled)?
        }
        .boxed()
    }

    fn delete_assets(&self, handles: Vec<PhotoHandle>) -> BoxFuture<'static, LibraryResult<()>> {
        let granted = self.authorization_status().is_granted();
        async move {
            if !granted {
                return Err(LibraryError::PermissionDenied);
            }
            tokio::task::spawn_blocking(move || {
                handles.iter().try_for_each(|handle| {
                    fs::remove_file(handle.location()).map_err(|err| LibraryError::from_io(&err))
                })
            })
            .await
            .map_err(|_| LibraryError::Cancelled)?
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::InMemoryConsent;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use image_rs::{Rgba, RgbaImage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn answering(granted: bool) -> (ConsentPrompt, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let prompt: ConsentPrompt = Arc::new(move |_root: PathBuf| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { granted }.boxed()
        });
        (prompt, calls)
    }

    fn library(root: &Path, consent: InMemoryConsent, granted: bool) -> FsPhotoLibrary {
        let (prompt, _) = answering(granted);
        FsPhotoLibrary::new(root, Arc::new(consent), prompt)
    }

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
            .save(path)
            .expect("failed to write png");
    }

    #[test]
    fn status_is_undetermined_without_record() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library = library(temp_dir.path(), InMemoryConsent::new(), true);
        assert_eq!(library.authorization_status(), Authorization::NotDetermined);
    }

    #[test]
    fn status_follows_recorded_decision() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let granted = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), true),
            true,
        );
        assert_eq!(granted.authorization_status(), Authorization::Authorized);

        let refused = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), false),
            true,
        );
        assert_eq!(refused.authorization_status(), Authorization::Denied);
    }

    #[test]
    fn granted_but_missing_root_is_denied() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone");
        let library = library(&missing, InMemoryConsent::with_decision(&missing, true), true);
        assert_eq!(library.authorization_status(), Authorization::Denied);
    }

    #[tokio::test]
    async fn request_records_the_answer() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let consent = Arc::new(InMemoryConsent::new());
        let (prompt, calls) = answering(true);
        let library = FsPhotoLibrary::new(temp_dir.path(), consent.clone(), prompt);

        assert_eq!(library.request_authorization().await, Authorization::Authorized);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(consent.consent_for(temp_dir.path()), Some(true));
        assert_eq!(library.authorization_status(), Authorization::Authorized);
    }

    #[tokio::test]
    async fn refused_request_is_denied() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library = library(temp_dir.path(), InMemoryConsent::new(), false);
        assert_eq!(library.request_authorization().await, Authorization::Denied);
        assert_eq!(library.authorization_status(), Authorization::Denied);
    }

    #[test]
    fn fetch_without_consent_is_refused() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library = library(temp_dir.path(), InMemoryConsent::new(), true);
        assert_eq!(
            library.fetch_image_assets(),
            Err(LibraryError::PermissionDenied)
        );
    }

    #[test]
    fn fetch_lists_supported_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(&temp_dir.path().join("a.png"));
        fs::write(temp_dir.path().join("readme.txt"), b"hi").expect("failed to write file");
        let library = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), true),
            true,
        );

        let photos = library.fetch_image_assets().expect("fetch failed");
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].file_name(), Some("a.png"));
    }

    #[tokio::test]
    async fn resolve_decodes_on_blocking_pool() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("a.png");
        write_png(&path);
        let library = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), true),
            true,
        );

        let resolved = library
            .resolve_image(PhotoHandle::new(&path), TargetSize::new(20, 30))
            .await
            .expect("resolve failed");
        assert_eq!(resolved.card.width(), 20);
        assert_eq!(resolved.card.height(), 30);
    }

    #[tokio::test]
    async fn delete_removes_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = temp_dir.path().join("a.png");
        let b = temp_dir.path().join("b.png");
        write_png(&a);
        write_png(&b);
        let library = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), true),
            true,
        );

        library
            .delete_assets(vec![PhotoHandle::new(&a)])
            .await
            .expect("delete failed");
        assert!(!a.exists());
        assert!(b.exists());
    }

    #[tokio::test]
    async fn delete_missing_file_reports_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library = library(
            temp_dir.path(),
            InMemoryConsent::with_decision(temp_dir.path(), true),
            true,
        );

        let result = library
            .delete_assets(vec![PhotoHandle::new(temp_dir.path().join("nope.png"))])
            .await;
        assert_eq!(result, Err(LibraryError::NotFound));
    }

    #[tokio::test]
    async fn delete_without_consent_is_refused() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = temp_dir.path().join("a.png");
        write_png(&a);
        let library = library(temp_dir.path(), InMemoryConsent::new(), true);

        let result = library.delete_assets(vec![PhotoHandle::new(&a)]).await;
        assert_eq!(result, Err(LibraryError::PermissionDenied));
        assert!(a.exists());
    }

    /// Store that accepts nothing, as if the state file were read-only.
    struct UnwritableConsent;

    impl ConsentStore for UnwritableConsent {
        fn consent_for(&self, _root: &Path) -> Option<bool> {
            None
        }

        fn record_consent(&self, _root: &Path, _granted: bool) -> Option<String> {
            Some("notification-state-write-error".to_string())
        }
    }

    #[tokio::test]
    async fn unsaved_consent_is_reported_to_diagnostics() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let (prompt, _) = answering(true);
        let library = FsPhotoLibrary::new(temp_dir.path(), Arc::new(UnwritableConsent), prompt)
            .with_diagnostics(collector.handle());

        let _ = library.request_authorization().await;
        collector.process_pending();

        let warning = collector.iter().find_map(|event| match &event.kind {
            DiagnosticEventKind::Warning { event } => Some(event.clone()),
            _ => None,
        });
        assert_eq!(
            warning,
            Some(WarningEvent::new(
                WarningType::ConfigurationIssue,
                "notification-state-write-error"
            ))
        );
    }
}
