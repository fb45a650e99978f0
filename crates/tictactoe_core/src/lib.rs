//! Tic-tac-toe game model with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, availability and line queries, deep copy
//! - **Player**: human players wait for input, the computer searches
//! - **Game**: turns, game over detection, computer reply chaining
//! - **Events**: synchronous bus that tells views about board changes
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, SetupConfig};
//!
//! let mut game = Game::new();
//! game.setup_game(&SetupConfig::new("Alice", "", true));
//!
//! // The computer answers before make_move returns.
//! game.make_move(1, 1).unwrap();
//! assert_eq!(game.board().empty_positions().len(), 7);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod events;
mod game;
pub mod minimax;
mod player;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use config::{DEFAULT_PLAYER1, DEFAULT_PLAYER2, SetupConfig};
pub use error::{MoveError, PlaceError};
pub use events::{EventBus, GameEvent, GameObserver, SubscriptionId};
pub use game::{Game, GameStatus, Phase};
pub use player::{COMPUTER_NAME, ComputerPlayer, HumanPlayer, Player};
pub use position::{Position, SIZE};
pub use types::{Grid, Square, Symbol};
