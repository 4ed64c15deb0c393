//! Library exports for the funpaint drawing surface.
//!
//! The core is [`input::DrawingSurface`]: it turns pointer events and mode commands into
//! [`draw::Shape`]s and replays them through any [`draw::DrawContext`]. Hosts supply the
//! window, the event loop and the rasterizer; this crate ships a Cairo implementation of the
//! drawing primitives and a script-driven headless host.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::DrawingSurface;
