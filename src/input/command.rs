//! Mode-selection commands and the menu that issues them.
//!
//! The host never reaches into the surface directly: menu items and scripts produce a
//! [`SurfaceCommand`] value and hand it to [`DrawingSurface::apply_command`].
//!
//! [`DrawingSurface::apply_command`]: crate::input::DrawingSurface::apply_command

use crate::draw::{BLUE, Color, GREEN, RED};
use crate::util;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A command from the host UI to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    /// Select a pen color and return to plain drawing
    SetColor(Color),
    /// Switch to the rainbow brush
    EnableRainbow,
    /// Switch to the eraser
    EnableEraser,
    /// Switch to circle stamping
    EnableStampCircle,
    /// Switch to square stamping
    EnableStampSquare,
}

/// Errors produced when parsing a command name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'color' expects a color name or r,g,b")]
    MissingColor,
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("unexpected trailing input '{0}'")]
    Trailing(String),
}

impl FromStr for SurfaceCommand {
    type Err = CommandParseError;

    /// Parses `rainbow`, `eraser`, `circle`, `square` or `color <name|r,g,b>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandParseError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "color" => {
                let spec = words.next().ok_or(CommandParseError::MissingColor)?;
                SurfaceCommand::SetColor(parse_color(spec)?)
            }
            "rainbow" => SurfaceCommand::EnableRainbow,
            "eraser" => SurfaceCommand::EnableEraser,
            "circle" => SurfaceCommand::EnableStampCircle,
            "square" => SurfaceCommand::EnableStampSquare,
            _ => return Err(CommandParseError::Unknown(name.to_string())),
        };

        match words.next() {
            Some(rest) => Err(CommandParseError::Trailing(rest.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for SurfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCommand::SetColor(color) => {
                let [r, g, b] = color.to_rgb8();
                write!(f, "color {r},{g},{b}")
            }
            SurfaceCommand::EnableRainbow => f.write_str("rainbow"),
            SurfaceCommand::EnableEraser => f.write_str("eraser"),
            SurfaceCommand::EnableStampCircle => f.write_str("circle"),
            SurfaceCommand::EnableStampSquare => f.write_str("square"),
        }
    }
}

fn parse_color(spec: &str) -> Result<Color, CommandParseError> {
    if let Some(color) = util::name_to_color(spec) {
        return Ok(color);
    }

    let channels: Vec<u8> = spec
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| CommandParseError::InvalidColor(spec.to_string()))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Color::from_rgb8(*r, *g, *b)),
        _ => Err(CommandParseError::InvalidColor(spec.to_string())),
    }
}

/// One selectable item in the host's menu bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEntry {
    /// Title of the menu the item belongs to
    pub menu: &'static str,
    /// Item label
    pub label: &'static str,
    /// Command dispatched when the item is chosen
    pub command: SurfaceCommand,
}

/// The stock menu bar: a "Colors" menu followed by a "Fun Modes" menu.
pub fn default_menu() -> Vec<MenuEntry> {
    const COLORS: &str = "Colors";
    const MODES: &str = "Fun Modes";

    vec![
        MenuEntry {
            menu: COLORS,
            label: "Red",
            command: SurfaceCommand::SetColor(RED),
        },
        MenuEntry {
            menu: COLORS,
            label: "Green",
            command: SurfaceCommand::SetColor(GREEN),
        },
        MenuEntry {
            menu: COLORS,
            label: "Blue",
            command: SurfaceCommand::SetColor(BLUE),
        },
        MenuEntry {
            menu: MODES,
            label: "Rainbow Brush",
            command: SurfaceCommand::EnableRainbow,
        },
        MenuEntry {
            menu: MODES,
            label: "Eraser",
            command: SurfaceCommand::EnableEraser,
        },
        MenuEntry {
            menu: MODES,
            label: "Draw Circle",
            command: SurfaceCommand::EnableStampCircle,
        },
        MenuEntry {
            menu: MODES,
            label: "Draw Square",
            command: SurfaceCommand::EnableStampSquare,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_color_commands() {
        assert_eq!("rainbow".parse::<SurfaceCommand>(), Ok(SurfaceCommand::EnableRainbow));
        assert_eq!("Eraser".parse::<SurfaceCommand>(), Ok(SurfaceCommand::EnableEraser));
        assert_eq!("circle".parse::<SurfaceCommand>(), Ok(SurfaceCommand::EnableStampCircle));
        assert_eq!("square".parse::<SurfaceCommand>(), Ok(SurfaceCommand::EnableStampSquare));
        assert_eq!("color green".parse::<SurfaceCommand>(), Ok(SurfaceCommand::SetColor(GREEN)));
        assert_eq!(
            "color 10,20,30".parse::<SurfaceCommand>(),
            Ok(SurfaceCommand::SetColor(Color::from_rgb8(10, 20, 30)))
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            "".parse::<SurfaceCommand>(),
            Err(CommandParseError::Empty)
        );
        assert_eq!(
            "color".parse::<SurfaceCommand>(),
            Err(CommandParseError::MissingColor)
        );
        assert_eq!(
            "color 1,2".parse::<SurfaceCommand>(),
            Err(CommandParseError::InvalidColor("1,2".to_string()))
        );
        assert_eq!(
            "color 300,0,0".parse::<SurfaceCommand>(),
            Err(CommandParseError::InvalidColor("300,0,0".to_string()))
        );
        assert_eq!(
            "undo".parse::<SurfaceCommand>(),
            Err(CommandParseError::Unknown("undo".to_string()))
        );
    }

    #[test]
    fn rejects_trailing_words() {
        assert_eq!(
            "rainbow now".parse::<SurfaceCommand>(),
            Err(CommandParseError::Trailing("now".to_string()))
        );
        assert_eq!(
            "color red blue".parse::<SurfaceCommand>(),
            Err(CommandParseError::Trailing("blue".to_string()))
        );
        assert_eq!(
            "  square  ".parse::<SurfaceCommand>(),
            Ok(SurfaceCommand::EnableStampSquare)
        );
    }

    #[test]
    fn display_output_parses_back() {
        for entry in default_menu() {
            let text = entry.command.to_string();
            assert_eq!(text.parse::<SurfaceCommand>(), Ok(entry.command), "menu item {}", entry.label);
        }
    }

    #[test]
    fn default_menu_lists_colors_before_modes() {
        let menu = default_menu();
        assert_eq!(menu.len(), 7);
        assert!(menu[..3].iter().all(|e| e.menu == "Colors"));
        assert!(menu[3..].iter().all(|e| e.menu == "Fun Modes"));
    }
}
