// SPDX-License-Identifier: MPL-2.0
//! Presentation state kept beside the swipe controller.
//!
//! - [`drag`] - Pointer tracking for the card drag
//! - [`motion`] - Interpolation of the card toward its gesture target

pub mod drag;
pub mod motion;

pub use drag::DragState;
pub use motion::{CardMotion, MotionFrame};
