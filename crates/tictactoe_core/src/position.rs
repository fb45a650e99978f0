//! Cell positions on the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A cell on the tic-tac-toe board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display and parsing.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// Creates a position from raw, possibly out-of-range coordinates.
    ///
    /// Returns `None` unless both `row` and `col` lie in `0..3`.
    pub fn from_coords(row: isize, col: isize) -> Option<Self> {
        let size = SIZE as isize;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Self::from_index(row as usize * SIZE + col as usize)
    }

    /// Parses a cell number (1-9, as printed on the board) or a label.
    ///
    /// Labels are matched case-insensitively; spaces and underscores are
    /// accepted in place of the hyphen.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        Position::iter().find(|pos| pos.label().to_lowercase() == wanted)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
