// SPDX-License-Identifier: MPL-2.0
//! Swipe controller: the single owner of the photo list, the current index,
//! and the card's gesture state.
//!
//! The controller is a plain state machine. It never talks to the library
//! itself; every operation that needs the outside world returns an
//! [`Effect`] that the application turns into an asynchronous task, and the
//! task's result comes back through one of the `*_resolved` / `*_completed`
//! methods. Because all calls arrive through the single Iced update loop, no
//! locking is needed.
//!
//! Per gesture: Idle → Dragging → {Deleting, Advancing, Resetting} → Idle.

use crate::domain::{gesture_bounds, Authorization, Curve, GestureState, PhotoHandle, SwipeDecision};
use crate::error::LibraryError;
use std::time::Duration;

/// Where the controller is in the startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting for the user to answer the authorization prompt.
    AwaitingAuthorization,
    /// Waiting for the asset list.
    Fetching,
    /// Access denied; nothing will be fetched this session.
    Denied,
    /// Asset list received (possibly empty).
    Loaded,
}

/// An action scheduled to run once the fly-out animation has had time to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Delete the photo that was current when the gesture was released.
    DeletePhoto(PhotoHandle),
    /// Advance to the next photo.
    NextPhoto,
}

/// Side effects the application should perform after a controller call.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Ask the library for authorization.
    RequestAuthorization,
    /// Fetch the asset list.
    FetchPhotos,
    /// Run `action` after `after` has elapsed, then hand it back via
    /// [`SwipeController::deferral_elapsed`].
    Schedule { action: Deferred, after: Duration },
    /// Ask the deletion gateway to remove this asset, then report via
    /// [`SwipeController::deletion_completed`].
    DeletePhoto(PhotoHandle),
}

/// Work that blocks new gestures until it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Deferred(Deferred),
    Deleting(PhotoHandle),
}

#[derive(Debug, Clone, Default)]
pub struct SwipeController {
    photos: Vec<PhotoHandle>,
    current_index: usize,
    gesture: GestureState,
    authorization: Option<Authorization>,
    phase: LoadPhase,
    alert_visible: bool,
    pending: Option<Pending>,
}

impl SwipeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Starts (or restarts) loading given the library's current permission.
    ///
    /// Calling this while an authorization request or a fetch is in flight
    /// does nothing, so at most one of each is outstanding. Once photos are
    /// loaded, a new fetch is only issued if the list is empty.
    pub fn load_photos(&mut self, status: Authorization) -> Effect {
        match self.phase {
            LoadPhase::AwaitingAuthorization | LoadPhase::Fetching => return Effect::None,
            LoadPhase::Loaded if !self.photos.is_empty() => return Effect::None,
            LoadPhase::Idle | LoadPhase::Denied | LoadPhase::Loaded => {}
        }

        self.authorization = Some(status);
        match status {
            Authorization::Authorized => {
                self.phase = LoadPhase::Fetching;
                Effect::FetchPhotos
            }
            Authorization::NotDetermined => {
                self.phase = LoadPhase::AwaitingAuthorization;
                Effect::RequestAuthorization
            }
            Authorization::Denied => {
                self.deny();
                Effect::None
            }
        }
    }

    /// Handles the user's answer to the authorization prompt.
    pub fn authorization_resolved(&mut self, status: Authorization) -> Effect {
        if self.phase != LoadPhase::AwaitingAuthorization {
            return Effect::None;
        }

        self.authorization = Some(status);
        if status.is_granted() {
            self.phase = LoadPhase::Fetching;
            Effect::FetchPhotos
        } else {
            self.deny();
            Effect::None
        }
    }

    /// Installs the fetched asset list.
    ///
    /// A failed fetch leaves an empty list; a permission failure also raises
    /// the alert. Returns `false` if no fetch was outstanding and the result
    /// was dropped.
    pub fn photos_fetched(&mut self, result: Result<Vec<PhotoHandle>, LibraryError>) -> bool {
        if self.phase != LoadPhase::Fetching {
            return false;
        }

        match result {
            Ok(photos) => {
                self.photos = photos;
                self.phase = LoadPhase::Loaded;
            }
            Err(LibraryError::PermissionDenied) => {
                self.photos.clear();
                self.deny();
            }
            Err(_) => {
                self.photos.clear();
                self.phase = LoadPhase::Loaded;
            }
        }
        self.current_index = 0;
        self.pending = None;
        self.gesture = GestureState::neutral(Curve::Immediate);
        true
    }

    fn deny(&mut self) {
        self.authorization = Some(Authorization::Denied);
        self.phase = LoadPhase::Denied;
        self.alert_visible = true;
    }

    /// Closes the permission alert. Access stays denied for the session.
    pub fn dismiss_alert(&mut self) {
        self.alert_visible = false;
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Returns `true` if drag input should currently move the card.
    #[must_use]
    pub fn accepts_gestures(&self) -> bool {
        !self.alert_visible && self.pending.is_none() && self.current_photo().is_some()
    }

    /// Follows the pointer while dragging.
    pub fn on_gesture_changed(&mut self, delta_x: f32) {
        if !self.accepts_gestures() {
            return;
        }
        self.gesture = GestureState::dragging(delta_x);
    }

    /// Classifies a released drag and starts the matching transition.
    ///
    /// For an accepted swipe the returned effect schedules the follow-up
    /// action after [`gesture_bounds::SWIPE_ANIMATION`]. A delete captures the
    /// current handle now, so the photo deleted later is the one the user
    /// swiped even if the index moves in between.
    pub fn on_gesture_ended(&mut self, delta_x: f32) -> Effect {
        if !self.accepts_gestures() {
            return Effect::None;
        }

        let decision = SwipeDecision::classify(delta_x);
        let action = match decision {
            SwipeDecision::Delete => match self.current_photo() {
                Some(handle) => Deferred::DeletePhoto(handle.clone()),
                None => return self.cancel_gesture(),
            },
            SwipeDecision::Skip => Deferred::NextPhoto,
            SwipeDecision::Cancel => return self.cancel_gesture(),
        };

        self.gesture = GestureState::flown_out(decision);
        self.pending = Some(Pending::Deferred(action.clone()));
        Effect::Schedule {
            action,
            after: gesture_bounds::SWIPE_ANIMATION,
        }
    }

    fn cancel_gesture(&mut self) -> Effect {
        self.gesture = GestureState::neutral(Curve::Spring);
        Effect::None
    }

    /// Runs a deferred action once its delay has elapsed.
    pub fn deferral_elapsed(&mut self, action: Deferred) -> Effect {
        if self.pending.as_ref() != Some(&Pending::Deferred(action.clone())) {
            return Effect::None;
        }
        self.pending = None;

        match action {
            Deferred::DeletePhoto(handle) => self.delete_photo(handle),
            Deferred::NextPhoto => {
                self.next_photo();
                Effect::None
            }
        }
    }

    // =========================================================================
    // List operations
    // =========================================================================

    /// Requests deletion of the photo at the current index.
    ///
    /// Does nothing if the index is out of bounds.
    pub fn delete_current_photo(&mut self) -> Effect {
        match self.current_photo() {
            Some(handle) => {
                let handle = handle.clone();
                self.delete_photo(handle)
            }
            None => Effect::None,
        }
    }

    /// Requests deletion of a specific photo, if it is still in the list.
    pub fn delete_photo(&mut self, handle: PhotoHandle) -> Effect {
        if !self.photos.contains(&handle) {
            self.gesture = GestureState::neutral(Curve::Spring);
            return Effect::None;
        }
        self.pending = Some(Pending::Deleting(handle.clone()));
        Effect::DeletePhoto(handle)
    }

    /// Applies the gateway's answer to a deletion request.
    ///
    /// On success the handle is removed wherever it currently sits; on
    /// failure the list and index stay as they are. Either way the card
    /// springs back into place.
    pub fn deletion_completed(&mut self, handle: &PhotoHandle, result: Result<(), LibraryError>) {
        if self.pending.as_ref() == Some(&Pending::Deleting(handle.clone())) {
            self.pending = None;
        }

        if result.is_ok() {
            self.remove_photo(handle);
        }
        self.gesture = GestureState::neutral(Curve::Spring);
    }

    /// Advances to the next photo. On the last photo the index stays put.
    pub fn next_photo(&mut self) {
        if self.current_index + 1 < self.photos.len() {
            self.current_index += 1;
        }
        self.gesture = GestureState::neutral(Curve::Spring);
    }

    fn remove_photo(&mut self, handle: &PhotoHandle) {
        let Some(position) = self.photos.iter().position(|photo| photo == handle) else {
            return;
        };
        self.photos.remove(position);

        if position < self.current_index {
            self.current_index -= 1;
        }
        if self.current_index >= self.photos.len() {
            self.current_index = self.photos.len().saturating_sub(1);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn photos(&self) -> &[PhotoHandle] {
        &self.photos
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the photo on the card, if any.
    #[must_use]
    pub fn current_photo(&self) -> Option<&PhotoHandle> {
        self.photos.get(self.current_index)
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Returns the last known permission, or `None` before the first check.
    #[must_use]
    pub fn authorization(&self) -> Option<Authorization> {
        self.authorization
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_alert_visible(&self) -> bool {
        self.alert_visible
    }

    /// Returns `true` while waiting for permission or the asset list.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            LoadPhase::AwaitingAuthorization | LoadPhase::Fetching
        )
    }

    /// Returns `true` if a deferred action or a deletion is outstanding.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
