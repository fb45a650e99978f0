//! Tests for board queries and line detection.

use tictactoe_core::{Board, Position, Square, Symbol};

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let symbol = match ch {
                'X' => Symbol::X,
                'O' => Symbol::O,
                _ => continue,
            };
            board.place_symbol(symbol, r as isize, c as isize).unwrap();
        }
    }
    board
}

#[test]
fn test_empty_board_all_available() {
    let board = Board::new();
    for row in 0..3 {
        for col in 0..3 {
            assert!(board.is_position_available(row, col));
        }
    }
}

#[test]
fn test_out_of_range_never_available() {
    let board = Board::new();
    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-1, -1), (3, 3), (100, 1)] {
        assert!(!board.is_position_available(row, col), "({row}, {col})");
    }
}

#[test]
fn test_occupied_not_available() {
    let mut board = Board::new();
    board.place_symbol(Symbol::X, 2, 2).unwrap();
    assert!(!board.is_position_available(2, 2));
    assert!(board.is_position_available(2, 1));
}

#[test]
fn test_place_on_occupied_is_noop() {
    let mut board = board_from(["X..", ".O.", "..."]);
    let before = board.clone();

    assert!(board.place_symbol(Symbol::O, 0, 0).is_err());
    assert!(board.place_symbol(Symbol::X, 1, 1).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_place_out_of_range_is_noop() {
    let mut board = board_from(["X..", "...", "..O"]);
    let before = board.clone();

    for (row, col) in [(-1, 0), (3, 1), (1, 3), (0, -2)] {
        assert!(board.place_symbol(Symbol::X, row, col).is_err());
    }
    assert_eq!(board, before);
}

#[test]
fn test_empty_positions_row_major() {
    let board = board_from(["X.O", ".X.", "O.."]);
    assert_eq!(
        board.empty_positions(),
        vec![
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomRight,
        ]
    );
}

#[test]
fn test_each_line_detected_independently() {
    let lines: [[(isize, isize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(2, 0), (1, 1), (0, 2)],
        [(0, 0), (1, 1), (2, 2)],
    ];

    for symbol in [Symbol::X, Symbol::O] {
        for line in lines {
            let mut board = Board::new();
            for (row, col) in line {
                board.place_symbol(symbol, row, col).unwrap();
            }
            assert!(board.has_three_in_row(symbol), "{symbol} on {line:?}");
            assert!(!board.has_three_in_row(symbol.opponent()));
            assert!(board.has_any_three_in_row());
            assert_eq!(board.winner(), Some(symbol));
        }
    }
}

#[test]
fn test_row_zero_of_x() {
    let board = board_from(["XXX", "O.O", "..."]);
    assert!(board.has_three_in_row(Symbol::X));
    assert!(!board.has_three_in_row(Symbol::O));
}

#[test]
fn test_column_one_of_o() {
    let board = board_from(["XO.", "XO.", ".OX"]);
    assert!(board.has_three_in_row(Symbol::O));
    assert!(!board.has_three_in_row(Symbol::X));
}

#[test]
fn test_broken_diagonal_is_not_a_line() {
    let board = board_from(["X..", ".O.", "..X"]);
    assert!(!board.has_three_in_row(Symbol::X));
    assert!(!board.has_any_three_in_row());
}

#[test]
fn test_two_in_a_row_is_not_a_line() {
    let board = board_from(["XX.", "...", "..."]);
    assert!(!board.has_any_three_in_row());
}

#[test]
fn test_full_board() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    assert!(board.is_full());
    assert!(board.empty_positions().is_empty());
}

#[test]
fn test_one_empty_square_is_not_full() {
    let board = board_from(["XOX", "XOO", "OX."]);
    assert!(!board.is_full());
    assert_eq!(board.empty_positions(), vec![Position::BottomRight]);
}

#[test]
fn test_copy_is_independent() {
    let original = board_from(["X..", "...", "..."]);
    let mut copy = original.copy_board();
    assert_eq!(copy, original);

    copy.place_symbol(Symbol::O, 1, 1).unwrap();

    assert_eq!(original.get(Position::Center), Square::Empty);
    assert_eq!(copy.get(Position::Center), Square::Occupied(Symbol::O));
    assert_ne!(copy, original);
}
