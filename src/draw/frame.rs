//! Frame container for the committed shapes of a drawing surface.

use super::shape::Shape;

/// Container for all committed shapes of a drawing session.
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer). The list only
/// grows: shapes are never reordered or removed while the frame is alive.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Committed shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
