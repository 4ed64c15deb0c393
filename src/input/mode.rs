//! Drawing mode selection.

/// Drawing mode of the surface.
///
/// Exactly one mode is active at a time. The mode decides what a left-button press creates:
/// a stroke in one of the three stroking modes, or an immediately committed stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Freehand stroke in the current color (default)
    #[default]
    Draw,
    /// Freehand stroke whose color is re-randomized on every move
    Rainbow,
    /// Freehand stroke painted with the background color
    Eraser,
    /// Click stamps a filled circle
    StampCircle,
    /// Click stamps a filled square
    StampSquare,
}

impl Mode {
    /// Human-readable name, matching the menu labels.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Rainbow => "Rainbow Brush",
            Mode::Eraser => "Eraser",
            Mode::StampCircle => "Draw Circle",
            Mode::StampSquare => "Draw Square",
        }
    }
}
