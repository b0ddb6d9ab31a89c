// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas, shown inside the card while its
//! bitmap is being resolved.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Time for one full turn.
pub const SPINNER_PERIOD: Duration = Duration::from_millis(1000);

/// Angular length of the moving arc.
const ARC_SWEEP: f32 = PI * 0.75;
const ARC_SEGMENTS: u16 = 24;
const STROKE_WIDTH: f32 = 3.0;

/// Rotation angle (radians, `0..TAU`) after `elapsed` of spinning.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let period = SPINNER_PERIOD.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period * TAU
}

/// Points along an arc of `radius` around `center`, starting at `start`
/// radians and sweeping `sweep` radians clockwise.
fn arc_points(center: Point, radius: f32, start: f32, sweep: f32) -> Vec<Point> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + sweep * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // The angle changes every frame, so there is nothing to cache.
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25 * self.color.a,
                    ..self.color
                }),
        );

        // Start at 12 o'clock.
        let points = arc_points(center, radius, self.rotation - PI / 2.0, ARC_SWEEP);
        let arc = Path::new(|builder| {
            let mut points = points.iter();
            if let Some(first) = points.next() {
                builder.move_to(*first);
            }
            for point in points {
                builder.line_to(*point);
            }
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn rotation_wraps_every_period() {
        assert_abs_diff_eq!(rotation_at(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(rotation_at(SPINNER_PERIOD / 2), PI, epsilon = 1e-4);
        assert_abs_diff_eq!(
            rotation_at(SPINNER_PERIOD + SPINNER_PERIOD / 4),
            PI / 2.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn arc_points_lie_on_the_circle() {
        let center = Point::new(10.0, 10.0);
        let points = arc_points(center, 5.0, 0.0, PI);

        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        for point in &points {
            assert_abs_diff_eq!(point.distance(center), 5.0, epsilon = 1e-4);
        }
        assert_abs_diff_eq!(points[0].x, 15.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[points.len() - 1].x, 5.0, epsilon = 1e-4);
    }
}
