// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": views render from borrowed state
//! and emit messages that the application routes back to the controller.
//!
//! # Screens
//!
//! - [`swipe`] - The card, the empty library state and the permission alert
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Drag tracking and card motion
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod swipe;
pub mod theming;
pub mod widgets;
