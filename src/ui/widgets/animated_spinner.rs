// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas.
//!
//! The spinner is stateless; the application keeps the rotation angle and
//! advances it with [`advance`] on every animation tick while the feed is
//! loading.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians added per animation tick.
pub const ROTATION_STEP: f32 = 0.12;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;
/// The arc covers three quarters of the ring.
const ARC_SWEEP: f32 = PI * 1.5;

/// Next rotation angle, kept within `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP).rem_euclid(TAU)
}

/// Rotating arc over a faint ring.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points along the visible arc, starting at the top of the ring when
/// `rotation` is zero.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - PI / 2.0;

    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + ARC_SWEEP * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
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
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: opacity::SCRIM,
                        ..self.color
                    }),
                );

                let points = arc_points(center, radius, self.rotation);
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
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around_full_turn() {
        let near_end = TAU - ROTATION_STEP / 2.0;
        let next = advance(near_end);
        assert!((0.0..TAU).contains(&next));
        assert!(next < ROTATION_STEP);
    }

    #[test]
    fn advance_moves_forward() {
        assert!((advance(0.0) - ROTATION_STEP).abs() < f32::EPSILON);
    }

    #[test]
    fn arc_starts_at_top() {
        let points = arc_points(Point::new(10.0, 10.0), 5.0, 0.0);
        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        let first = points[0];
        assert!((first.x - 10.0).abs() < 1e-4);
        assert!((first.y - 5.0).abs() < 1e-4);
    }
}
