// SPDX-License-Identifier: MPL-2.0
//! Domain layer - photo identity, permission, and gesture rules.
//!
//! This module contains pure domain types and the fixed gesture thresholds.
//! It depends on nothing but `std` and `serde`.
//!
//! # Modules
//!
//! - [`photo`]: [`PhotoHandle`], [`RawImage`], [`ResolvedImage`], [`TargetSize`]
//! - [`permission`]: [`Authorization`]
//! - [`gesture`]: [`GestureState`], [`SwipeDecision`], [`Curve`]
//! - [`display`]: [`CardEdge`](display::CardEdge), [`BlurSigma`](display::BlurSigma)

pub mod display;
pub mod gesture;
pub mod permission;
pub mod photo;

pub use gesture::{gesture_bounds, Curve, GestureState, SwipeDecision};
pub use permission::Authorization;
pub use photo::{PhotoHandle, RawImage, ResolvedImage, TargetSize};
