//! The 3x3 board.

use crate::position::SIZE;
use crate::rules;
use crate::{Grid, PlaceError, Position, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A placed symbol is never cleared; starting over means replacing the
/// whole board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the symbol at raw coordinates, `None` when empty or off the board.
    pub fn symbol_at(&self, row: isize, col: isize) -> Option<Symbol> {
        Position::from_coords(row, col).and_then(|pos| self.get(pos).symbol())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a row-by-row snapshot of the grid.
    pub fn grid(&self) -> Grid {
        let mut grid = [[Square::Empty; SIZE]; SIZE];
        for pos in Position::ALL {
            grid[pos.row()][pos.col()] = self.get(pos);
        }
        grid
    }

    /// Checks whether a symbol can be placed at the given coordinates.
    ///
    /// False when either coordinate is outside `0..3` or the square is taken.
    pub fn is_position_available(&self, row: isize, col: isize) -> bool {
        Position::from_coords(row, col).is_some_and(|pos| self.is_empty(pos))
    }

    /// Places `symbol` at the given coordinates.
    ///
    /// Invalid coordinates and occupied squares leave the board untouched.
    /// The error only reports what happened; callers may ignore it.
    #[instrument(skip(self), level = "trace")]
    pub fn place_symbol(
        &mut self,
        symbol: Symbol,
        row: isize,
        col: isize,
    ) -> Result<Position, PlaceError> {
        let pos = Position::from_coords(row, col).ok_or(PlaceError::OutOfBounds { row, col })?;
        self.place_at(symbol, pos)?;
        Ok(pos)
    }

    /// Places `symbol` at a known-valid position.
    pub fn place_at(&mut self, symbol: Symbol, pos: Position) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            return Err(PlaceError::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(symbol);
        trace!(%symbol, position = %pos, "Symbol placed");
        Ok(())
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks whether `symbol` fills any of the 8 lines.
    pub fn has_three_in_row(&self, symbol: Symbol) -> bool {
        rules::lines(self)
            .iter()
            .any(|line| line.iter().all(|sq| *sq == Square::Occupied(symbol)))
    }

    /// Checks whether either symbol fills a line.
    pub fn has_any_three_in_row(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the symbol that completed a line, if any.
    pub fn winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }

    /// Checks if no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|sq| !sq.is_empty())
    }

    /// Produces an independent copy for look-ahead.
    pub fn copy_board(&self) -> Board {
        self.clone()
    }
}

impl std::fmt::Display for Board {
    /// Empty squares show their 1-based cell number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = row * SIZE + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(symbol) => write!(f, "{}", symbol)?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
