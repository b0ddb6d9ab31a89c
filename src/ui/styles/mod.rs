// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the swipe screen.

pub mod button;
pub mod container;
