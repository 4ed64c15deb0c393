use crate::draw::{FreehandStroke, Shape};
use crate::input::{events::MouseButton, mode::Mode};
use log::{debug, trace};

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// - Stamp modes: a circle or square is created at the pointer and committed at once
    /// - Stroking modes: a new stroke starts with the press position as its first point
    /// - Non-left buttons are ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        match self.mode {
            Mode::StampCircle => self.commit(Shape::Circle {
                center: (x, y),
                radius: self.shape_size,
                color: self.current_color,
            }),
            Mode::StampSquare => self.commit(Shape::Square {
                top_left: (x, y),
                side: self.shape_size,
                color: self.current_color,
            }),
            Mode::Eraser | Mode::Draw | Mode::Rainbow => {
                let mut stroke = match self.mode {
                    Mode::Eraser => FreehandStroke::new(self.erase_color, false),
                    mode => FreehandStroke::new(self.current_color, mode == Mode::Rainbow),
                };
                stroke.append_point((x, y));

                if matches!(self.state, DrawingState::Stroking(_)) {
                    // A second press without a release: keep the stroke that was already drawn.
                    self.finish_stroke();
                }
                self.state = DrawingState::Stroking(stroke);
            }
        }
        self.needs_redraw = true;
    }

    /// Processes pointer motion events.
    ///
    /// While stroking, refreshes a rainbow stroke's color and then appends the pointer
    /// position. Motion while idle is ignored.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        if let DrawingState::Stroking(stroke) = &mut self.state {
            stroke.refresh_rainbow_color(&mut self.rng);
            stroke.append_point((x, y));
            trace!("Stroke extended to ({x}, {y}), {} points", stroke.points().len());
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// When the left button is released during a stroke, the release position is appended
    /// and the stroke is moved into the committed shapes. Releases while idle are no-ops.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        if let DrawingState::Stroking(stroke) = &mut self.state {
            stroke.append_point((x, y));
            self.finish_stroke();
            self.needs_redraw = true;
        }
    }

    fn finish_stroke(&mut self) {
        if let DrawingState::Stroking(stroke) = std::mem::take(&mut self.state) {
            self.commit(Shape::Freehand(stroke));
        }
    }

    fn commit(&mut self, shape: Shape) {
        debug!(
            "Committed {} (shape #{})",
            shape_kind(&shape),
            self.frame.len() + 1
        );
        self.frame.add_shape(shape);
    }
}

fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Circle { .. } => "circle",
        Shape::Square { .. } => "square",
        Shape::Freehand(_) => "freehand stroke",
    }
}
