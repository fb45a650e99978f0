//! Player trait and implementations.

use crate::{Board, Position, Symbol, minimax};
use tracing::{debug, instrument};

/// Display name of the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// A participant holding one of the two symbols.
pub trait Player: std::fmt::Debug {
    /// Symbol this player places.
    fn symbol(&self) -> Symbol;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Move chosen without outside input.
    ///
    /// `None` means the game has to wait for a move from the view.
    fn automated_move(&self, board: &Board) -> Option<Position>;
}

/// Player whose moves come from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanPlayer {
    symbol: Symbol,
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
        }
    }

    /// Renames the player.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Player for HumanPlayer {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn automated_move(&self, _board: &Board) -> Option<Position> {
        None
    }
}

/// Player that searches the full game tree for its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerPlayer {
    symbol: Symbol,
}

impl ComputerPlayer {
    /// Creates a computer player for `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl Player for ComputerPlayer {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        COMPUTER_NAME
    }

    #[instrument(skip(self, board), fields(symbol = %self.symbol))]
    fn automated_move(&self, board: &Board) -> Option<Position> {
        let position = minimax::best_move(board, self.symbol);
        debug!(?position, "Computer chose move");
        position
    }
}
