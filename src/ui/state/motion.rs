// SPDX-License-Identifier: MPL-2.0
//! Card motion.
//!
//! The controller only states where the card should be and with which
//! [`Curve`] it should get there. `CardMotion` interpolates between the
//! position on screen and that target, driven by the animation tick.

use crate::domain::{Curve, GestureState};
use std::time::{Duration, Instant};

/// Angular frequency of the critically damped spring (rad/s).
const SPRING_OMEGA: f32 = 14.0;

/// After this long the spring snaps onto its target.
const SPRING_SETTLE: Duration = Duration::from_millis(700);

/// Offset and opacity as drawn in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub offset: f32,
    pub opacity: f32,
}

impl MotionFrame {
    fn of(state: GestureState) -> Self {
        Self {
            offset: state.offset,
            opacity: state.opacity,
        }
    }

    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            offset: self.offset + (to.offset - self.offset) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardMotion {
    from: MotionFrame,
    target: GestureState,
    started_at: Instant,
}

impl CardMotion {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        let target = GestureState::default();
        Self {
            from: MotionFrame::of(target),
            target,
            started_at: now,
        }
    }

    /// Heads toward `target`, starting from wherever the card is at `now`.
    ///
    /// Retargeting to the current target keeps the running animation.
    pub fn retarget(&mut self, target: GestureState, now: Instant) {
        if target == self.target {
            return;
        }
        self.from = self.sample(now);
        self.target = target;
        self.started_at = now;
    }

    /// Where the card is at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> MotionFrame {
        let to = MotionFrame::of(self.target);
        let elapsed = now.saturating_duration_since(self.started_at);

        match self.target.curve {
            Curve::Immediate => to,
            Curve::EaseOut(duration) => {
                if duration.is_zero() || elapsed >= duration {
                    return to;
                }
                let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                self.from.lerp(to, ease_out_cubic(t))
            }
            Curve::Spring => {
                if elapsed >= SPRING_SETTLE {
                    return to;
                }
                let progress = 1.0 - spring_remaining(elapsed.as_secs_f32());
                self.from.lerp(to, progress)
            }
        }
    }

    /// Returns `true` until the card has reached its target.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        match self.target.curve {
            Curve::Immediate => false,
            Curve::EaseOut(duration) => elapsed < duration,
            Curve::Spring => elapsed < SPRING_SETTLE,
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Share of the initial distance still left after `t` seconds.
fn spring_remaining(t: f32) -> f32 {
    let wt = SPRING_OMEGA * t;
    (1.0 + wt) * (-wt).exp()
}
