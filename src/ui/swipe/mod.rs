// SPDX-License-Identifier: MPL-2.0
//! The swipe screen: the card stack, the empty library state and the
//! permission alert.
//!
//! Views here are pure functions of the state the application hands them;
//! they emit [`Message`]s and never mutate anything themselves.

pub mod card;
pub mod empty_state;
pub mod permission_alert;

pub use card::CardBitmaps;

/// Messages emitted by the swipe screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Left button pressed on the card; a drag starts.
    CardPressed,
    /// OK pressed on the permission alert.
    DismissAlert,
    /// Retry pressed on the empty library screen.
    RetryLoad,
}
