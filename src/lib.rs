// SPDX-License-Identifier: MPL-2.0
//! `photo_swipe` presents a photo library one image at a time as a card.
//! Dragging the card right deletes the photo, dragging it left skips it.
//!
//! Built with the Iced GUI framework, with Fluent localization, TOML
//! preferences and a bounded in-memory diagnostics log.

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

pub use app::config;

#[cfg(test)]
pub mod test_utils;
