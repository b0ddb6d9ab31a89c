// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture model.
//!
//! A drag moves the card horizontally and fades it. When the drag is
//! released, the final horizontal displacement decides the outcome:
//!
//! | release `delta_x`     | decision | card goes to        |
//! |-----------------------|----------|---------------------|
//! | `> SWIPE_THRESHOLD`   | delete   | `+FLY_OUT_OFFSET`, 0 |
//! | `< -SWIPE_THRESHOLD`  | skip     | `-FLY_OUT_OFFSET`, 0 |
//! | otherwise             | cancel   | `0`, `1` (spring)   |

use std::time::Duration;

/// Fixed gesture constants, in logical pixels and seconds.
pub mod gesture_bounds {
    use std::time::Duration;

    /// Horizontal distance a release must exceed to count as a swipe.
    pub const SWIPE_THRESHOLD: f32 = 100.0;
    /// Drag distance at which the fade reaches its maximum.
    pub const FULL_FADE_DISTANCE: f32 = 200.0;
    /// Maximum opacity reduction while dragging.
    pub const MAX_DRAG_FADE: f32 = 0.5;
    /// Offset the card flies to when a swipe is accepted.
    pub const FLY_OUT_OFFSET: f32 = 500.0;
    /// Duration of the fly-out animation and of the deferral that follows it.
    pub const SWIPE_ANIMATION: Duration = Duration::from_millis(300);
}

/// Outcome of a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Swiped right: delete the photo.
    Delete,
    /// Swiped left: move on to the next photo.
    Skip,
    /// Released inside the threshold: snap back.
    Cancel,
}

impl SwipeDecision {
    /// Classifies a release displacement.
    #[must_use]
    pub fn classify(delta_x: f32) -> Self {
        if delta_x > gesture_bounds::SWIPE_THRESHOLD {
            SwipeDecision::Delete
        } else if delta_x < -gesture_bounds::SWIPE_THRESHOLD {
            SwipeDecision::Skip
        } else {
            SwipeDecision::Cancel
        }
    }
}

/// How a change of [`GestureState`] should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Follow the pointer, no interpolation.
    Immediate,
    /// Decelerating tween over the given duration.
    EaseOut(Duration),
    /// Damped spring settling back to rest.
    Spring,
}

/// Transient horizontal offset and opacity of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub offset: f32,
    pub opacity: f32,
    pub curve: Curve,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::neutral(Curve::Immediate)
    }
}

impl GestureState {
    /// The resting state: centered and fully opaque.
    #[must_use]
    pub fn neutral(curve: Curve) -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
            curve,
        }
    }

    /// State while the pointer is dragged `delta_x` pixels.
    #[must_use]
    pub fn dragging(delta_x: f32) -> Self {
        let fade = (delta_x.abs() / gesture_bounds::FULL_FADE_DISTANCE)
            .min(gesture_bounds::MAX_DRAG_FADE);
        Self {
            offset: delta_x,
            opacity: 1.0 - fade,
            curve: Curve::Immediate,
        }
    }

    /// State the card animates to once a swipe is accepted.
    #[must_use]
    pub fn flown_out(decision: SwipeDecision) -> Self {
        let offset = match decision {
            SwipeDecision::Delete => gesture_bounds::FLY_OUT_OFFSET,
            SwipeDecision::Skip => -gesture_bounds::FLY_OUT_OFFSET,
            SwipeDecision::Cancel => return Self::neutral(Curve::Spring),
        };
        Self {
            offset,
            opacity: 0.0,
            curve: Curve::EaseOut(gesture_bounds::SWIPE_ANIMATION),
        }
    }

    /// Returns `true` if offset and opacity are at rest.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.offset == 0.0 && self.opacity == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn classify_uses_strict_thresholds() {
        assert_eq!(SwipeDecision::classify(150.0), SwipeDecision::Delete);
        assert_eq!(SwipeDecision::classify(-150.0), SwipeDecision::Skip);
        assert_eq!(SwipeDecision::classify(100.0), SwipeDecision::Cancel);
        assert_eq!(SwipeDecision::classify(-100.0), SwipeDecision::Cancel);
        assert_eq!(SwipeDecision::classify(0.0), SwipeDecision::Cancel);
    }

    #[test]
    fn dragging_fades_proportionally() {
        let state = GestureState::dragging(100.0);
        assert_abs_diff_eq!(state.offset, 100.0);
        assert_abs_diff_eq!(state.opacity, 0.5);

        let left = GestureState::dragging(-50.0);
        assert_abs_diff_eq!(left.opacity, 0.75);
    }

    #[test]
    fn dragging_fade_is_capped() {
        let state = GestureState::dragging(-1000.0);
        assert_abs_diff_eq!(state.offset, -1000.0);
        assert_abs_diff_eq!(state.opacity, 0.5);
    }

    #[test]
    fn flown_out_targets_fixed_offsets() {
        let right = GestureState::flown_out(SwipeDecision::Delete);
        assert_abs_diff_eq!(right.offset, 500.0);
        assert_abs_diff_eq!(right.opacity, 0.0);
        assert_eq!(right.curve, Curve::EaseOut(Duration::from_millis(300)));

        let left = GestureState::flown_out(SwipeDecision::Skip);
        assert_abs_diff_eq!(left.offset, -500.0);
    }

    #[test]
    fn cancel_springs_back_to_neutral() {
        let state = GestureState::flown_out(SwipeDecision::Cancel);
        assert!(state.is_neutral());
        assert_eq!(state.curve, Curve::Spring);
    }
}
