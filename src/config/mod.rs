//! Configuration file support for funpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/funpaint/config.toml`. Settings include the default pen color,
//! the stamp size and the canvas geometry.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SHAPE_SIZE_RANGE: std::ops::RangeInclusive<i32> = 1..=500;
const CANVAS_SIZE_RANGE: std::ops::RangeInclusive<i32> = 1..=8192;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// shape_size = 50
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen and stamp defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the default)
    /// and a warning is logged.
    fn validate_and_clamp(&mut self) {
        if !SHAPE_SIZE_RANGE.contains(&self.drawing.shape_size) {
            warn!(
                "Invalid shape_size {}, clamping to 1-500 range",
                self.drawing.shape_size
            );
            self.drawing.shape_size = self
                .drawing
                .shape_size
                .clamp(*SHAPE_SIZE_RANGE.start(), *SHAPE_SIZE_RANGE.end());
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !CANVAS_SIZE_RANGE.contains(value) {
                warn!("Invalid canvas {name} {value}, clamping to 1-8192 range");
                *value = (*value).clamp(*CANVAS_SIZE_RANGE.start(), *CANVAS_SIZE_RANGE.end());
            }
        }

        if !self.drawing.default_color.is_valid() {
            warn!(
                "Invalid default_color {:?}, falling back to 'black'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        if !self.canvas.background.is_valid() {
            warn!(
                "Invalid background {:?}, falling back to 'white'",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("white".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/funpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("funpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
