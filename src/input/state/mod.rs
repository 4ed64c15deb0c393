mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DEFAULT_SHAPE_SIZE, DrawingState, DrawingSurface, SurfaceSettings};
