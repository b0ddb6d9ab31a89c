// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Card**: Photo card geometry
//! - **Backdrop**: Blur applied behind the card
//! - **Window**: Initial and minimum window size
//! - **Animation**: Frame interval for card and spinner motion

use crate::domain::display::display_bounds;
use crate::domain::gesture_bounds;

// ==========================================================================
// Card Defaults
// ==========================================================================

/// Default card width in logical pixels.
pub const DEFAULT_CARD_WIDTH: u32 = display_bounds::DEFAULT_CARD_WIDTH;

/// Default card height in logical pixels.
pub const DEFAULT_CARD_HEIGHT: u32 = display_bounds::DEFAULT_CARD_HEIGHT;

/// Smallest accepted card edge.
pub const MIN_CARD_EDGE: u32 = display_bounds::MIN_CARD_EDGE;

/// Largest accepted card edge.
pub const MAX_CARD_EDGE: u32 = display_bounds::MAX_CARD_EDGE;

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// Default Gaussian blur sigma for the backdrop.
pub const DEFAULT_BACKDROP_BLUR: f32 = display_bounds::DEFAULT_BLUR_SIGMA;

/// Largest accepted blur sigma.
pub const MAX_BACKDROP_BLUR: f32 = display_bounds::MAX_BLUR_SIGMA;

/// Opacity of the blurred backdrop behind the card.
pub const BACKDROP_OPACITY: f32 = 0.5;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation frames in milliseconds (~60 fps).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Card validation
    assert!(MIN_CARD_EDGE > 0);
    assert!(MAX_CARD_EDGE > MIN_CARD_EDGE);
    assert!(DEFAULT_CARD_WIDTH >= MIN_CARD_EDGE);
    assert!(DEFAULT_CARD_WIDTH <= MAX_CARD_EDGE);
    assert!(DEFAULT_CARD_HEIGHT >= MIN_CARD_EDGE);
    assert!(DEFAULT_CARD_HEIGHT <= MAX_CARD_EDGE);

    // Backdrop validation
    assert!(DEFAULT_BACKDROP_BLUR >= 0.0);
    assert!(DEFAULT_BACKDROP_BLUR <= MAX_BACKDROP_BLUR);
    assert!(BACKDROP_OPACITY > 0.0 && BACKDROP_OPACITY <= 1.0);

    // Window must fit the default card
    assert!(MIN_WINDOW_WIDTH >= DEFAULT_CARD_WIDTH);
    assert!(MIN_WINDOW_HEIGHT >= DEFAULT_CARD_HEIGHT);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    // Gesture validation: a swipe must be decided before the fade saturates,
    // and the card must leave a default-sized window when it flies out.
    assert!(gesture_bounds::SWIPE_THRESHOLD > 0.0);
    assert!(gesture_bounds::FULL_FADE_DISTANCE > gesture_bounds::SWIPE_THRESHOLD);
    assert!(gesture_bounds::MAX_DRAG_FADE > 0.0 && gesture_bounds::MAX_DRAG_FADE < 1.0);
    assert!(gesture_bounds::FLY_OUT_OFFSET > gesture_bounds::FULL_FADE_DISTANCE);
    assert!(gesture_bounds::SWIPE_ANIMATION.as_millis() > ANIMATION_FRAME_MS as u128);

    assert!(ANIMATION_FRAME_MS > 0);
};
