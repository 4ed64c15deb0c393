//! Drawing state machine and surface state management.

use crate::config::Config;
use crate::draw::{BLACK, Color, FreehandStroke, Frame, Shape, WHITE};
use crate::input::{command::SurfaceCommand, mode::Mode};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default side length / radius for stamped shapes.
pub const DEFAULT_SHAPE_SIZE: i32 = 50;

/// Current pointer state machine.
///
/// Stamps are created and committed inside a single press, so the only state that spans
/// several events is an in-progress freehand stroke.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a press
    #[default]
    Idle,
    /// Left button held down, stroke under construction
    Stroking(FreehandStroke),
}

/// Construction parameters for a [`DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSettings {
    /// Pen color before any color command
    pub initial_color: Color,
    /// Radius of stamped circles and side of stamped squares
    pub shape_size: i32,
    /// Ink used by the eraser (the canvas background)
    pub erase_color: Color,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            initial_color: BLACK,
            shape_size: DEFAULT_SHAPE_SIZE,
            erase_color: WHITE,
        }
    }
}

impl SurfaceSettings {
    /// Builds settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            initial_color: config.drawing.default_color.to_color(),
            shape_size: config.drawing.shape_size,
            erase_color: config.canvas.background.to_color(),
        }
    }
}

/// Interactive drawing surface.
///
/// Owns the committed shapes, the stroke under construction (if any), the pen color and the
/// active [`Mode`]. Hosts feed it pointer events and commands, and call [`render`] whenever
/// `needs_redraw` is set.
///
/// [`render`]: DrawingSurface::render
pub struct DrawingSurface {
    /// Committed shapes in draw order
    pub(crate) frame: Frame,
    /// Pointer state machine
    pub(crate) state: DrawingState,
    /// Current pen color (changed by color commands)
    pub(crate) current_color: Color,
    /// Active drawing mode
    pub(crate) mode: Mode,
    /// Size parameter for stamped shapes
    pub(crate) shape_size: i32,
    /// Color painted by eraser strokes
    pub(crate) erase_color: Color,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Randomness source for rainbow strokes
    pub(crate) rng: StdRng,
}

impl DrawingSurface {
    /// Creates a surface whose rainbow colors come from system entropy.
    pub fn new(settings: SurfaceSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a surface with a deterministic rainbow color sequence.
    pub fn with_seed(settings: SurfaceSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: SurfaceSettings, rng: StdRng) -> Self {
        Self {
            frame: Frame::new(),
            state: DrawingState::Idle,
            current_color: settings.initial_color,
            mode: Mode::Draw,
            shape_size: settings.shape_size,
            erase_color: settings.erase_color,
            needs_redraw: true,
            rng,
        }
    }

    /// Committed shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// The stroke under construction, if a press is in progress.
    pub fn in_progress(&self) -> Option<&FreehandStroke> {
        match &self.state {
            DrawingState::Idle => None,
            DrawingState::Stroking(stroke) => Some(stroke),
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn shape_size(&self) -> i32 {
        self.shape_size
    }

    pub fn erase_color(&self) -> Color {
        self.erase_color
    }

    /// Returns and clears the pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Sets the pen color and returns to plain drawing.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        self.switch_mode(Mode::Draw);
    }

    pub fn enable_rainbow(&mut self) {
        self.switch_mode(Mode::Rainbow);
    }

    pub fn enable_eraser(&mut self) {
        self.switch_mode(Mode::Eraser);
    }

    pub fn enable_stamp_circle(&mut self) {
        self.switch_mode(Mode::StampCircle);
    }

    pub fn enable_stamp_square(&mut self) {
        self.switch_mode(Mode::StampSquare);
    }

    /// Dispatches a command from the host UI.
    pub fn apply_command(&mut self, command: SurfaceCommand) {
        match command {
            SurfaceCommand::SetColor(color) => self.set_color(color),
            SurfaceCommand::EnableRainbow => self.enable_rainbow(),
            SurfaceCommand::EnableEraser => self.enable_eraser(),
            SurfaceCommand::EnableStampCircle => self.enable_stamp_circle(),
            SurfaceCommand::EnableStampSquare => self.enable_stamp_square(),
        }
    }

    // A stroke already in progress keeps the mode it was created with.
    fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("Mode changed: {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }
}
