// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`filesystem`]: a directory tree as the photo library (implements
//!   [`PhotoLibrary`])
//!
//! [`PhotoLibrary`]: crate::application::port::PhotoLibrary

pub mod filesystem;

pub use filesystem::{native_consent_prompt, ConsentPrompt, FsPhotoLibrary};
