//! Cairo-based implementation of the drawing primitives.

use super::color::Color;
use super::context::DrawContext;
use super::shape::Shape;

/// Fills the whole canvas with the background color.
///
/// Should be called on a fresh surface before rendering shapes. Eraser strokes paint with the
/// same color, so they only "erase" against this background.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // A failed paint leaves the surface transparent
}

/// Renders all shapes in a collection to a drawing context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes<C: DrawContext + ?Sized>(ctx: &mut C, shapes: &[Shape]) {
    for shape in shapes {
        shape.render(ctx);
    }
}

impl DrawContext for cairo::Context {
    fn draw_filled_circle(&mut self, center: (i32, i32), radius: i32, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.new_path();
        self.arc(
            center.0 as f64,
            center.1 as f64,
            radius.max(0) as f64,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        let _ = self.fill();
    }

    fn draw_filled_rectangle(&mut self, top_left: (i32, i32), size: (i32, i32), color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.rectangle(
            top_left.0 as f64,
            top_left.1 as f64,
            size.0.max(0) as f64,
            size.1.max(0) as f64,
        );
        let _ = self.fill();
    }

    fn draw_polyline(&mut self, points: &[(i32, i32)], color: Color, width: f64) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        // Round caps turn a zero-length path into a dot; a stroke that never moved draws nothing.
        if rest.iter().all(|&p| p == (x0, y0)) {
            return;
        }

        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.set_line_width(width);
        self.set_line_cap(cairo::LineCap::Round);
        self.set_line_join(cairo::LineJoin::Round);

        self.move_to(x0 as f64, y0 as f64);
        for &(x, y) in rest {
            self.line_to(x as f64, y as f64);
        }

        let _ = self.stroke();
    }
}
