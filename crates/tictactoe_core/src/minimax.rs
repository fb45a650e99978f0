//! Exhaustive minimax search for the computer player.
//!
//! Scores are kept from the searcher's side as a cost: a board where the
//! searcher owns a line scores -1, a board where any other line is complete
//! scores +1, a full board scores 0. On the searcher's turn the lowest cost is
//! chosen, on the opponent's turn the highest. The whole tree below the root
//! is visited; nothing is pruned.

use crate::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Score of a board in which the searcher has completed a line.
pub const SEARCHER_LINE: i8 = -1;
/// Score of a board in which some other line is complete.
pub const OTHER_LINE: i8 = 1;
/// Score of a full board without a line.
pub const FULL_BOARD: i8 = 0;

/// Result of searching one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Cost of the node from the searcher's side.
    pub score: i8,
    /// Move leading to the best child; `None` at terminal nodes.
    pub position: Option<Position>,
}

/// Picks the best move for `searcher`, who is to move on `board`.
///
/// Returns `None` when the board has no empty square or is already decided.
#[instrument(skip(board), fields(empty = board.empty_positions().len()))]
pub fn best_move(board: &Board, searcher: Symbol) -> Option<Position> {
    let result = minimax(board, searcher, searcher);
    debug!(score = result.score, position = ?result.position, "Search finished");
    result.position
}

/// Scores `board` with `current` to move, from `searcher`'s side.
pub fn minimax(board: &Board, current: Symbol, searcher: Symbol) -> Scored {
    if board.has_three_in_row(searcher) {
        return Scored {
            score: SEARCHER_LINE,
            position: None,
        };
    }
    if board.has_any_three_in_row() {
        return Scored {
            score: OTHER_LINE,
            position: None,
        };
    }
    if board.is_full() {
        return Scored {
            score: FULL_BOARD,
            position: None,
        };
    }

    let mut candidates: Vec<Scored> = board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            let mut next = board.copy_board();
            // Position comes from empty_positions, placement cannot fail.
            let _ = next.place_at(current, pos);
            Scored {
                score: minimax(&next, current.opponent(), searcher).score,
                position: Some(pos),
            }
        })
        .collect();

    // Stable: ties keep row-major order.
    candidates.sort_by_key(|c| c.score);

    let chosen = if current == searcher {
        candidates.first()
    } else {
        candidates.last()
    };

    chosen.copied().unwrap_or(Scored {
        score: FULL_BOARD,
        position: None,
    })
}
