// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks the pointer window-wide so a drag that starts on the card keeps
//! following the cursor (and ends) even outside the card's bounds.

use iced::Point;

#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Last cursor position reported by the window.
    cursor: Option<Point>,
    /// Where the active drag started, if one is in progress.
    start_position: Option<Point>,
}

impl DragState {
    /// Starts a drag at the last known cursor position.
    ///
    /// Returns `false` when no cursor position is known yet.
    pub fn start(&mut self) -> bool {
        self.start_position = self.cursor;
        self.start_position.is_some()
    }

    /// Records a cursor move and returns the horizontal displacement when a
    /// drag is in progress.
    pub fn track(&mut self, position: Point) -> Option<f32> {
        self.cursor = Some(position);
        self.delta_x()
    }

    /// Ends the drag, returning its final horizontal displacement.
    pub fn finish(&mut self) -> Option<f32> {
        let delta = self.delta_x();
        self.start_position = None;
        delta
    }

    /// Drops the active drag without reporting it.
    pub fn cancel(&mut self) {
        self.start_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_position.is_some()
    }

    fn delta_x(&self) -> Option<f32> {
        let start = self.start_position?;
        let current = self.cursor?;
        Some(current.x - start.x)
    }
}
