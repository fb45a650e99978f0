//! Configuration file for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::SetupConfig;
use tracing::{debug, info, instrument};

/// How events are written to the terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board drawings and plain sentences.
    #[default]
    #[display("text")]
    Text,
    /// One JSON object per event.
    #[display("json")]
    Json,
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format for game events.
    format: OutputFormat,
}

impl DisplayConfig {
    /// Creates display settings.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Contents of a `tictactoe.toml` file.
///
/// ```toml
/// [setup]
/// player1 = "Alice"
/// ai_game = true
///
/// [display]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Players and opponent.
    setup: SetupConfig,
    /// Output settings.
    display: DisplayConfig,
}

impl AppConfig {
    /// Creates a configuration.
    pub fn new(setup: SetupConfig, display: DisplayConfig) -> Self {
        Self { setup, display }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player1 = config.setup.player1_name(),
            ai_game = config.setup.ai_game(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the setup section.
    pub fn with_setup(mut self, setup: SetupConfig) -> Self {
        self.setup = setup;
        self
    }

    /// Replaces the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.display.format = format;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
