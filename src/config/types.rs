//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen and stamp defaults when the surface is created. The pen color can be
/// changed at runtime through color commands.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Radius of stamped circles and side length of stamped squares (valid range: 1 - 500)
    #[serde(default = "default_shape_size")]
    pub shape_size: i32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            shape_size: default_shape_size(),
        }
    }
}

/// Canvas settings used by the headless host.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background color; eraser strokes paint with this color
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_shape_size() -> i32 {
    crate::input::state::DEFAULT_SHAPE_SIZE
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
