//! Rendering primitives and shape definitions.
//!
//! This module defines the core drawing types of the surface:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`] / [`FreehandStroke`]: the drawable units (circle, square, freehand)
//! - [`Frame`]: Container for all committed shapes
//! - [`DrawContext`]: the primitive drawing capability shapes render through
//! - Cairo implementation of that capability

pub mod color;
pub mod context;
pub mod frame;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use context::{DrawCall, DrawContext, RecordingContext};
pub use frame::Frame;
pub use render::{render_background, render_shapes};
pub use shape::{FREEHAND_LINE_WIDTH, FreehandStroke, Shape};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
