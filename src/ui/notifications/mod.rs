// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts report problems the user can do nothing about in the moment
//! (unreadable settings, a library that failed to list) without blocking
//! the swipe screen.
//!
//! # Components
//!
//! - [`Notification`] - A message key with a severity level
//! - [`Manager`] - Queuing and lifecycle management
//! - [`Toast`] - Rendering
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-config-load-error"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Warnings disappear after 5s; errors stay until dismissed. At most three
//! toasts are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
