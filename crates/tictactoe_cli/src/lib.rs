//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Cli**: command-line flags and subcommands
//! - **Config**: optional TOML file with players and output format
//! - **View**: observer printing board updates and results
//! - **App**: interactive loop and computer self-play

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod view;

pub use app::{run_play, run_selfplay};
pub use cli::{Cli, Command as CliCommand};
pub use config::{AppConfig, ConfigError, DisplayConfig, OutputFormat};
pub use input::{Command, HELP, InputError, parse_command};
pub use view::{TerminalView, game_over_message, render_grid};
