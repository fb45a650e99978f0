//! Line enumeration and win detection.

use crate::{Board, Position, Square, Symbol};

/// The 8 winning lines, in evaluation order.
///
/// Rows as stored, then columns, then the main diagonal running from the
/// bottom-left corner up to the top-right, then the anti-diagonal from the
/// top-left corner down to the bottom-right.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::BottomLeft, Position::Center, Position::TopRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
];

/// Contents of every line on the board, in [`LINES`] order.
pub fn lines(board: &Board) -> [[Square; 3]; 8] {
    LINES.map(|line| line.map(|pos| board.get(pos)))
}

/// Returns the symbol filling a line, if any.
///
/// When both symbols somehow fill lines the first line in [`LINES`] order
/// wins.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    lines(board).into_iter().find_map(|[a, b, c]| match a {
        Square::Occupied(symbol) if a == b && b == c => Some(symbol),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in LINES.iter().skip(i + 1) {
                let mut a = *a;
                let mut b = *b;
                a.sort();
                b.sort();
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_center_is_on_four_lines() {
        let count = LINES
            .iter()
            .filter(|line| line.contains(&Position::Center))
            .count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_lines_follow_board_contents() {
        let mut board = Board::new();
        board.place_at(Symbol::O, Position::BottomLeft).unwrap();
        let lines = lines(&board);
        // Third row, first column and main diagonal all start at (2,0).
        assert_eq!(lines[2][0], Square::Occupied(Symbol::O));
        assert_eq!(lines[3][2], Square::Occupied(Symbol::O));
        assert_eq!(lines[6][0], Square::Occupied(Symbol::O));
        assert_eq!(lines[7][0], Square::Empty);
    }
}
