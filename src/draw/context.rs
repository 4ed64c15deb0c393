//! Drawing-context capability consumed by shapes.
//!
//! Shapes never talk to a rasterizer directly. They issue the three primitive calls defined by
//! [`DrawContext`], which the host implements for its backend (Cairo in this crate, see
//! [`crate::draw::render`]). [`RecordingContext`] captures the calls instead of rasterizing them.

use super::color::Color;

/// Primitive drawing operations a host must provide.
pub trait DrawContext {
    /// Fills a circle centered at `center`.
    fn draw_filled_circle(&mut self, center: (i32, i32), radius: i32, color: Color);

    /// Fills an axis-aligned rectangle whose top-left corner is `top_left`.
    fn draw_filled_rectangle(&mut self, top_left: (i32, i32), size: (i32, i32), color: Color);

    /// Strokes a connected polyline through `points` in order.
    fn draw_polyline(&mut self, points: &[(i32, i32)], color: Color, width: f64);
}

/// A single primitive call captured by [`RecordingContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    FilledCircle {
        center: (i32, i32),
        radius: i32,
        color: Color,
    },
    FilledRectangle {
        top_left: (i32, i32),
        size: (i32, i32),
        color: Color,
    },
    Polyline {
        points: Vec<(i32, i32)>,
        color: Color,
        width: f64,
    },
}

/// Records primitive calls in issue order.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Consumes the recorder and returns its calls.
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl DrawContext for RecordingContext {
    fn draw_filled_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.calls.push(DrawCall::FilledCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_filled_rectangle(&mut self, top_left: (i32, i32), size: (i32, i32), color: Color) {
        self.calls.push(DrawCall::FilledRectangle {
            top_left,
            size,
            color,
        });
    }

    fn draw_polyline(&mut self, points: &[(i32, i32)], color: Color, width: f64) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }
}
