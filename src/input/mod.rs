//! Input handling and the drawing-surface state machine.
//!
//! This module translates host pointer events and mode commands into shapes. It maintains the
//! current mode, drawing color and committed shapes, and tracks the stroke under construction
//! between a press and the matching release.

pub mod command;
pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use command::{MenuEntry, SurfaceCommand, default_menu};
pub use events::MouseButton;
pub use mode::Mode;
pub use state::{DrawingState, DrawingSurface, SurfaceSettings};
