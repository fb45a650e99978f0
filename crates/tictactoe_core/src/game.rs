//! Game orchestration: turns, game over, computer replies.

use crate::config::{DEFAULT_PLAYER1, DEFAULT_PLAYER2};
use crate::{
    Board, ComputerPlayer, EventBus, GameEvent, HumanPlayer, MoveError, Player, Position,
    SetupConfig, Symbol,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of the board as it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed by this symbol.
    Won(Symbol),
    /// Board is full without a line.
    Draw,
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players not configured yet.
    Setup,
    /// Moves are being accepted.
    InProgress,
    /// Won or drawn; only a reset continues.
    Over,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, both players and the event bus. Every change to the
/// board is announced on the bus before the call that caused it returns.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    /// Index into `players` of whoever moves next.
    turn: usize,
    configured: bool,
    bus: EventBus,
}

impl Game {
    /// Creates a game between two default-named humans with its own bus.
    pub fn new() -> Self {
        Self::with_bus(EventBus::new())
    }

    /// Creates a game between two default-named humans that publishes on `bus`.
    pub fn with_bus(bus: EventBus) -> Self {
        Self {
            board: Board::new(),
            players: [
                Box::new(HumanPlayer::new(Symbol::X, DEFAULT_PLAYER1)),
                Box::new(HumanPlayer::new(Symbol::O, DEFAULT_PLAYER2)),
            ],
            turn: 0,
            configured: false,
            bus,
        }
    }

    /// Creates a game between arbitrary players.
    ///
    /// `first` moves first and should hold X, `second` should hold O. The
    /// game counts as configured; no automated move is made until
    /// [`Game::advance`] or [`Game::make_move`] is called.
    #[instrument(skip_all, fields(first = first.name(), second = second.name()))]
    pub fn with_players(first: Box<dyn Player>, second: Box<dyn Player>, bus: EventBus) -> Self {
        debug!("Creating game");
        Self {
            board: Board::new(),
            players: [first, second],
            turn: 0,
            configured: true,
            bus,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player holding the turn.
    pub fn current_player(&self) -> &dyn Player {
        self.players[self.turn].as_ref()
    }

    /// Returns the first and second player.
    pub fn players(&self) -> [&dyn Player; 2] {
        [self.players[0].as_ref(), self.players[1].as_ref()]
    }

    /// Returns the player placing `symbol`.
    ///
    /// Falls back to the second player if neither holds it.
    pub fn player(&self, symbol: Symbol) -> &dyn Player {
        self.players
            .iter()
            .find(|p| p.symbol() == symbol)
            .unwrap_or(&self.players[1])
            .as_ref()
    }

    /// Event bus used for announcements.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Assigns names and, for a game against the computer, swaps the second
    /// player for a [`ComputerPlayer`]. Announces the board.
    #[instrument(skip(self))]
    pub fn setup_game(&mut self, config: &SetupConfig) {
        self.players[0] = Box::new(HumanPlayer::new(Symbol::X, config.player1_name()));
        self.players[1] = if *config.ai_game() {
            Box::new(ComputerPlayer::new(Symbol::O))
        } else {
            Box::new(HumanPlayer::new(Symbol::O, config.player2_name()))
        };
        self.configured = true;

        info!(
            player1 = self.players[0].name(),
            player2 = self.players[1].name(),
            "Game configured"
        );
        self.announce_board();
    }

    /// Plays the current player's symbol at `(row, col)`.
    ///
    /// Unavailable squares and finished games leave everything unchanged
    /// and publish nothing. After a move that does not end the game the turn
    /// passes on, and a computer holding the new turn replies at once; the
    /// chain of replies finishes before this call returns.
    #[instrument(skip(self), fields(player = self.current_player().name()))]
    pub fn make_move(&mut self, row: isize, col: isize) -> Result<(), MoveError> {
        if self.is_over() {
            warn!("Move after game over ignored");
            return Err(MoveError::GameOver);
        }

        let symbol = self.current_player().symbol();
        let position = self
            .board
            .place_symbol(symbol, row, col)
            .inspect_err(|e| warn!(error = %e, "Move ignored"))?;

        info!(%symbol, %position, "Move applied");
        self.announce_board();

        if self.is_over() {
            self.broadcast_game_over();
            return Ok(());
        }

        self.change_turns();
        self.advance()
    }

    /// Plays the current player's symbol at `position`.
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        self.make_move(position.row() as isize, position.col() as isize)
    }

    /// Lets an automated player holding the turn make its move.
    ///
    /// Does nothing when the game is over or a human is to move.
    pub fn advance(&mut self) -> Result<(), MoveError> {
        if self.is_over() {
            return Ok(());
        }
        match self.current_player().automated_move(&self.board) {
            Some(position) => {
                debug!(player = self.current_player().name(), %position, "Automated reply");
                self.play(position)
            }
            None => Ok(()),
        }
    }

    /// Checks whether either symbol completed a line.
    pub fn is_winner(&self) -> bool {
        self.board.has_any_three_in_row()
    }

    /// Checks whether the board is full without a line.
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && !self.is_winner()
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.is_winner() || self.board.is_full()
    }

    /// Outcome of the board as it stands.
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(symbol) => GameStatus::Won(symbol),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::Over
        } else if self.configured {
            Phase::InProgress
        } else {
            Phase::Setup
        }
    }

    /// Announces the winner's name, or `None` for a draw.
    ///
    /// Publishes nothing while the game is still running.
    #[instrument(skip(self))]
    pub fn broadcast_game_over(&mut self) {
        if !self.is_over() {
            return;
        }
        let winner = self
            .board
            .winner()
            .map(|symbol| self.player(symbol).name().to_string());

        info!(?winner, "Game over");
        self.bus.publish(&GameEvent::GameOver { winner });
    }

    /// Starts over on an empty board with the first player to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.turn = 0;
        info!("Game reset");
        self.announce_board();
    }

    fn change_turns(&mut self) {
        self.turn = 1 - self.turn;
    }

    fn announce_board(&mut self) {
        let grid = self.board.grid();
        self.bus.publish(&GameEvent::BoardUpdated { grid });
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
