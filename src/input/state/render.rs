use crate::draw::{DrawContext, render_shapes};

use super::DrawingSurface;

impl DrawingSurface {
    /// Repaints the surface: committed shapes in order, then the stroke in progress.
    ///
    /// Rendering reads state only, so repeated calls on the same state issue identical
    /// draw calls.
    pub fn render<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        render_shapes(ctx, self.frame.shapes());
        if let Some(stroke) = self.in_progress() {
            stroke.render(ctx);
        }
    }
}
