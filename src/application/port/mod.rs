// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`library`]: photo library access (permission, fetch, resolve, delete)
//! - [`consent`]: where library adapters remember the user's access decision
//!
//! Ports use domain types only (no Iced handles, no filesystem paths beyond
//! what a [`PhotoHandle`](crate::domain::PhotoHandle) exposes).

pub mod consent;
pub mod library;

pub use consent::ConsentStore;
#[cfg(test)]
pub(crate) use consent::InMemoryConsent;
pub use library::{LibraryResult, PhotoLibrary};
