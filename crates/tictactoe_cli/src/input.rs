//! Parsing of lines typed by the player.

use derive_more::{Display, Error};
use tictactoe_core::Position;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a symbol at raw coordinates (validated by the game).
    Move {
        /// Row, 0-based.
        row: isize,
        /// Column, 0-based.
        col: isize,
    },
    /// Start a new game with the same players.
    Reset,
    /// Show the accepted input forms.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised input '{}'", input)]
pub struct InputError {
    /// The offending line, trimmed.
    pub input: String,
}

/// Help text listing accepted input.
pub const HELP: &str = "\
Enter a move as `row col` (0-2 each, e.g. `0 2`), a cell number 1-9,
or a cell name such as `center` or `top-left`.
Commands: `reset` (or `replay`), `help`, `quit`.";

/// Parses one input line.
///
/// Two integers are passed through unchecked so that the game decides
/// whether the square exists.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "reset" | "replay" | "r" => return Ok(Command::Reset),
        "help" | "?" | "h" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<isize>(), col.parse::<isize>())
    {
        return Ok(Command::Move { row, col });
    }

    let position = Position::from_label_or_number(trimmed).ok_or_else(|| InputError {
        input: trimmed.to_string(),
    })?;
    Ok(Command::Move {
        row: position.row() as isize,
        col: position.col() as isize,
    })
}
