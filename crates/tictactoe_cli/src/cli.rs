//! Command-line interface for tictactoe.

use crate::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with an optional unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for game events (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin
    Play {
        /// Name of the player holding X
        #[arg(long)]
        player1: Option<String>,

        /// Name of the player holding O
        #[arg(long)]
        player2: Option<String>,

        /// Play against the computer
        #[arg(long)]
        ai: bool,
    },

    /// Watch the computer play itself
    Selfplay,
}

impl Cli {
    /// Log filter matching the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
