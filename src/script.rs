//! Headless session scripts.
//!
//! A script stands in for a live window: each line is one pointer event or one menu command,
//! replayed against a [`DrawingSurface`] in order.
//!
//! ```text
//! # comments and blank lines are ignored
//! color green
//! down 10 10
//! move 20 10
//! up 30 10
//! circle
//! down 200 150
//! ```
//!
//! Pointer lines are `down X Y [button]`, `move X Y` and `up X Y [button]`; the button
//! defaults to `left`. Any other line is parsed as a [`SurfaceCommand`].

use crate::input::{DrawingSurface, MouseButton, SurfaceCommand, command::CommandParseError};
use log::debug;
use thiserror::Error;

/// A single replayable step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Press { button: MouseButton, x: i32, y: i32 },
    Motion { x: i32, y: i32 },
    Release { button: MouseButton, x: i32, y: i32 },
    Command(SurfaceCommand),
}

/// Errors produced while parsing a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandParseError,
    },
    #[error("line {line}: invalid coordinate '{value}'")]
    Coordinate { line: usize, value: String },
    #[error("line {line}: '{verb}' expects X and Y")]
    MissingCoordinate { line: usize, verb: String },
    #[error("line {line}: {reason}")]
    Button { line: usize, reason: String },
    #[error("line {line}: unexpected trailing input '{rest}'")]
    Trailing { line: usize, rest: String },
}

/// Parses a whole script, stopping at the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        steps.push(parse_line(line, index + 1)?);
    }
    Ok(steps)
}

fn parse_line(line: &str, number: usize) -> Result<ScriptStep, ScriptError> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();

    match verb.as_str() {
        "down" | "move" | "up" => {
            let mut coordinate = || {
                let value = words.next().ok_or_else(|| ScriptError::MissingCoordinate {
                    line: number,
                    verb: verb.clone(),
                })?;
                value.parse::<i32>().map_err(|_| ScriptError::Coordinate {
                    line: number,
                    value: value.to_string(),
                })
            };
            let x = coordinate()?;
            let y = coordinate()?;

            let button = match (verb.as_str(), words.next()) {
                ("move", Some(rest)) => {
                    return Err(ScriptError::Trailing {
                        line: number,
                        rest: rest.to_string(),
                    });
                }
                (_, Some(name)) => name.parse::<MouseButton>().map_err(|reason| {
                    ScriptError::Button {
                        line: number,
                        reason,
                    }
                })?,
                (_, None) => MouseButton::Left,
            };

            if let Some(rest) = words.next() {
                return Err(ScriptError::Trailing {
                    line: number,
                    rest: rest.to_string(),
                });
            }

            Ok(match verb.as_str() {
                "down" => ScriptStep::Press { button, x, y },
                "up" => ScriptStep::Release { button, x, y },
                _ => ScriptStep::Motion { x, y },
            })
        }
        _ => line
            .parse::<SurfaceCommand>()
            .map(ScriptStep::Command)
            .map_err(|source| ScriptError::Command {
                line: number,
                source,
            }),
    }
}

/// Replays steps against the surface in order.
pub fn run_script(surface: &mut DrawingSurface, steps: &[ScriptStep]) {
    for step in steps {
        debug!("Replaying {:?}", step);
        match *step {
            ScriptStep::Press { button, x, y } => surface.on_mouse_press(button, x, y),
            ScriptStep::Motion { x, y } => surface.on_mouse_motion(x, y),
            ScriptStep::Release { button, x, y } => surface.on_mouse_release(button, x, y),
            ScriptStep::Command(command) => surface.apply_command(command),
        }
    }
}
