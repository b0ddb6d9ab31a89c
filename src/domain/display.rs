// SPDX-License-Identifier: MPL-2.0
//! Display newtypes.
//!
//! Type-safe wrappers for the card geometry and backdrop blur, clamped to
//! the ranges the renderer can handle.

/// Card and blur bounds.
pub mod display_bounds {
    /// Smallest card edge in logical pixels.
    pub const MIN_CARD_EDGE: u32 = 160;
    /// Largest card edge in logical pixels.
    pub const MAX_CARD_EDGE: u32 = 1600;
    /// Default card width.
    pub const DEFAULT_CARD_WIDTH: u32 = 320;
    /// Default card height.
    pub const DEFAULT_CARD_HEIGHT: u32 = 450;
    /// Maximum backdrop blur sigma.
    pub const MAX_BLUR_SIGMA: f32 = 100.0;
    /// Default backdrop blur sigma.
    pub const DEFAULT_BLUR_SIGMA: f32 = 30.0;
}

/// One edge of the photo card, clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEdge(u32);

impl CardEdge {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(display_bounds::MIN_CARD_EDGE, display_bounds::MAX_CARD_EDGE))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Gaussian blur sigma applied to the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurSigma(f32);

impl BlurSigma {
    /// Creates a sigma, clamping to `0..=MAX_BLUR_SIGMA`. NaN becomes the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, display_bounds::MAX_BLUR_SIGMA))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BlurSigma {
    fn default() -> Self {
        Self(display_bounds::DEFAULT_BLUR_SIGMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_edge_clamps() {
        assert_eq!(CardEdge::new(10).value(), display_bounds::MIN_CARD_EDGE);
        assert_eq!(CardEdge::new(99_999).value(), display_bounds::MAX_CARD_EDGE);
        assert_eq!(CardEdge::new(320).value(), 320);
    }

    #[test]
    fn blur_sigma_clamps_and_rejects_nan() {
        assert_eq!(BlurSigma::new(-3.0).value(), 0.0);
        assert_eq!(BlurSigma::new(500.0).value(), display_bounds::MAX_BLUR_SIGMA);
        assert_eq!(BlurSigma::new(f32::NAN), BlurSigma::default());
    }
}
