// SPDX-License-Identifier: MPL-2.0
//! Card image resolution state.
//!
//! Each time a different photo becomes current, [`ImageRenderer::show`]
//! hands out a new [`ResolveRequest`] stamped with a fresh generation. Only
//! the answer to the latest request is accepted; anything older is dropped
//! so a slow decode can never overwrite the photo the user is looking at.
//!
//! The renderer is generic over the resolved payload so the presentation
//! layer can store GPU-ready handles while tests use plain values.

use crate::domain::{PhotoHandle, TargetSize};
use crate::error::LibraryError;

/// A resolution the caller should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub generation: u64,
    pub handle: PhotoHandle,
    pub size: TargetSize,
}

/// What the card currently shows.
#[derive(Debug, Clone)]
pub enum RenderState<T> {
    /// No photo is current.
    Empty,
    /// Waiting for the bitmap.
    Loading { handle: PhotoHandle },
    /// Bitmap resolved.
    Ready { handle: PhotoHandle, image: T },
    /// Resolution failed; the card shows a static message.
    Failed {
        handle: PhotoHandle,
        error: LibraryError,
    },
}

impl<T> RenderState<T> {
    fn handle(&self) -> Option<&PhotoHandle> {
        match self {
            RenderState::Empty => None,
            RenderState::Loading { handle }
            | RenderState::Ready { handle, .. }
            | RenderState::Failed { handle, .. } => Some(handle),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageRenderer<T> {
    generation: u64,
    size: TargetSize,
    state: RenderState<T>,
}

impl<T> ImageRenderer<T> {
    #[must_use]
    pub fn new(size: TargetSize) -> Self {
        Self {
            generation: 0,
            size,
            state: RenderState::Empty,
        }
    }

    /// Points the card at `handle`.
    ///
    /// Returns a request when a new resolution must start. Showing the photo
    /// that is already on the card returns `None`.
    pub fn show(&mut self, handle: Option<&PhotoHandle>) -> Option<ResolveRequest> {
        if self.state.handle() == handle {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        match handle {
            Some(handle) => {
                self.state = RenderState::Loading {
                    handle: handle.clone(),
                };
                Some(ResolveRequest {
                    generation: self.generation,
                    handle: handle.clone(),
                    size: self.size,
                })
            }
            None => {
                self.state = RenderState::Empty;
                None
            }
        }
    }

    /// Accepts the result of a request.
    ///
    /// Returns `false` (and leaves the state untouched) if `generation` is
    /// not the latest one handed out.
    pub fn complete(&mut self, generation: u64, result: Result<T, LibraryError>) -> bool {
        if generation != self.generation {
            return false;
        }
        let RenderState::Loading { handle } = &self.state else {
            return false;
        };
        let handle = handle.clone();

        self.state = match result {
            Ok(image) => RenderState::Ready { handle, image },
            Err(error) => RenderState::Failed { handle, error },
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> &RenderState<T> {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RenderState::Loading { .. })
    }

    #[must_use]
    pub fn target_size(&self) -> TargetSize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ImageRenderer<&'static str> {
        ImageRenderer::new(TargetSize::new(320, 450))
    }

    #[test]
    fn showing_a_photo_issues_a_request() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        let request = renderer.show(Some(&a)).expect("request");
        assert_eq!(request.handle, a);
        assert_eq!(request.size, TargetSize::new(320, 450));
        assert!(renderer.is_loading());
    }

    #[test]
    fn showing_same_photo_twice_reuses_request() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        assert!(renderer.show(Some(&a)).is_some());
        assert!(renderer.show(Some(&a)).is_none());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        let b = PhotoHandle::new("b.jpg");
        let first = renderer.show(Some(&a)).expect("request");
        let second = renderer.show(Some(&b)).expect("request");

        assert!(!renderer.complete(first.generation, Ok("pixels of a")));
        assert!(renderer.is_loading());

        assert!(renderer.complete(second.generation, Ok("pixels of b")));
        match renderer.state() {
            RenderState::Ready { handle, image } => {
                assert_eq!(handle, &b);
                assert_eq!(*image, "pixels of b");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn failure_is_recorded_for_current_photo() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        let request = renderer.show(Some(&a)).expect("request");
        assert!(renderer.complete(request.generation, Err(LibraryError::NotFound)));
        assert!(matches!(
            renderer.state(),
            RenderState::Failed { error: LibraryError::NotFound, .. }
        ));
    }

    #[test]
    fn clearing_the_card_invalidates_pending_request() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        let request = renderer.show(Some(&a)).expect("request");
        assert!(renderer.show(None).is_none());
        assert!(!renderer.complete(request.generation, Ok("late")));
        assert!(matches!(renderer.state(), RenderState::Empty));
    }

    #[test]
    fn returning_to_a_failed_photo_after_another_retries() {
        let mut renderer = renderer();
        let a = PhotoHandle::new("a.jpg");
        let b = PhotoHandle::new("b.jpg");
        let request = renderer.show(Some(&a)).expect("request");
        renderer.complete(request.generation, Err(LibraryError::Decode("bad".into())));
        renderer.show(Some(&b));
        assert!(renderer.show(Some(&a)).is_some());
    }
}
