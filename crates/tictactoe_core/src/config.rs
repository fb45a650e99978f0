//! Game setup submitted by the view before play starts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default name for the first human player.
pub const DEFAULT_PLAYER1: &str = "Player 1";
/// Default name for the second human player.
pub const DEFAULT_PLAYER2: &str = "Player 2";

/// Player names and opponent choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Name of the player holding X.
    player1: String,
    /// Name of the player holding O; ignored when `ai_game` is set.
    player2: String,
    /// Replace the second player with the computer.
    ai_game: bool,
}

impl SetupConfig {
    /// Creates a setup.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, ai_game: bool) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            ai_game,
        }
    }

    /// Name for the first player, falling back to the default when blank.
    pub fn player1_name(&self) -> &str {
        non_blank(&self.player1).unwrap_or(DEFAULT_PLAYER1)
    }

    /// Name for the second human player, falling back to the default when blank.
    pub fn player2_name(&self) -> &str {
        non_blank(&self.player2).unwrap_or(DEFAULT_PLAYER2)
    }

    /// Overrides the first player's name.
    pub fn with_player1(mut self, name: impl Into<String>) -> Self {
        self.player1 = name.into();
        self
    }

    /// Overrides the second player's name.
    pub fn with_player2(mut self, name: impl Into<String>) -> Self {
        self.player2 = name.into();
        self
    }

    /// Overrides the opponent choice.
    pub fn with_ai_game(mut self, ai_game: bool) -> Self {
        self.ai_game = ai_game;
        self
    }
}

fn non_blank(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}
