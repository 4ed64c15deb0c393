//! Shape definitions for the drawing surface.

use super::color::Color;
use super::context::DrawContext;
use rand::Rng;

/// Line width used for every freehand stroke, in surface units.
pub const FREEHAND_LINE_WIDTH: f64 = 2.0;

/// Represents a drawable shape on the surface.
///
/// Geometry is fixed at creation; only the color may change afterwards and it is read at
/// render time.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled circle stamped with a single click
    Circle {
        /// Center coordinate (the click position)
        center: (i32, i32),
        /// Radius in surface units
        radius: i32,
        /// Fill color
        color: Color,
    },
    /// Filled square stamped with a single click
    Square {
        /// Top-left coordinate (the click position)
        top_left: (i32, i32),
        /// Side length in surface units
        side: i32,
        /// Fill color
        color: Color,
    },
    /// Freehand drawing - polyline connecting pointer drag points
    Freehand(FreehandStroke),
}

impl Shape {
    /// Issues the primitive draw call for this shape.
    ///
    /// Degenerate geometry (non-positive radius or side, fewer than two stroke points)
    /// produces no output.
    pub fn render<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        match self {
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                if *radius > 0 {
                    ctx.draw_filled_circle(*center, *radius, *color);
                }
            }
            Shape::Square {
                top_left,
                side,
                color,
            } => {
                if *side > 0 {
                    ctx.draw_filled_rectangle(*top_left, (*side, *side), *color);
                }
            }
            Shape::Freehand(stroke) => stroke.render(ctx),
        }
    }

    /// Overwrites the stored color.
    pub fn set_color(&mut self, new_color: Color) {
        match self {
            Shape::Circle { color, .. } | Shape::Square { color, .. } => *color = new_color,
            Shape::Freehand(stroke) => stroke.set_color(new_color),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Circle { color, .. } | Shape::Square { color, .. } => *color,
            Shape::Freehand(stroke) => stroke.color(),
        }
    }
}

/// An append-only point sequence drawn as a single polyline.
///
/// When `rainbow` is set, the driving surface re-randomizes the color before each appended
/// point. The whole stroke renders in whatever color it holds at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct FreehandStroke {
    points: Vec<(i32, i32)>,
    color: Color,
    rainbow: bool,
}

impl FreehandStroke {
    /// Creates an empty stroke.
    pub fn new(color: Color, rainbow: bool) -> Self {
        Self {
            points: Vec::new(),
            color,
            rainbow,
        }
    }

    /// Appends a point. Consecutive duplicates are kept.
    pub fn append_point(&mut self, point: (i32, i32)) {
        self.points.push(point);
    }

    /// Replaces the color with a random opaque one if this is a rainbow stroke.
    pub fn refresh_rainbow_color<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.rainbow {
            self.color = Color::random_opaque(rng);
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }

    /// Draws the stroke as one polyline; a single point draws nothing.
    pub fn render<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        if self.points.len() > 1 {
            ctx.draw_polyline(&self.points, self.color, FREEHAND_LINE_WIDTH);
        }
    }
}
