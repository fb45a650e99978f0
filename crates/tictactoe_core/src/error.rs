//! Error types for rejected moves.
//!
//! A rejected move never changes the board. Front ends are free to drop
//! these errors and treat the call as a no-op.

use crate::Position;
use derive_more::{Display, Error, From};

/// Why a symbol could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Why a move was not applied to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The board rejected the placement.
    #[display("{}", _0)]
    Place(PlaceError),

    /// The game already has a winner or a full board.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,
}
