// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::Deferred;
use crate::domain::{Authorization, PhotoHandle};
use crate::error::LibraryError;
use crate::ui::notifications;
use crate::ui::swipe::{self, CardBitmaps};
use iced::{event, window};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages and carry the results of background work
/// back onto the update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Swipe(swipe::Message),
    Notification(notifications::NotificationMessage),
    /// Native event routed from the window subscription.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// The user answered the authorization prompt.
    AuthorizationResolved(Authorization),
    /// The asset list (or the failure to produce it).
    PhotosFetched(Result<Vec<PhotoHandle>, LibraryError>),
    /// A card bitmap resolved for the given renderer generation.
    ImageResolved {
        generation: u64,
        result: Result<CardBitmaps, LibraryError>,
    },
    /// The fly-out delay for a swipe has elapsed.
    DeferralElapsed(Deferred),
    /// The library answered a deletion request.
    DeletionCompleted {
        handle: PhotoHandle,
        result: Result<(), LibraryError>,
    },
    /// Frame tick while the card or spinner is animating.
    AnimationTick(Instant),
    /// Periodic tick for notification auto-dismiss and diagnostics draining.
    Tick(Instant),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `it`).
    pub lang: Option<String>,
    /// Directory to treat as the photo library.
    pub library: Option<PathBuf>,
}
