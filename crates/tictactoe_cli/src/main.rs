//! tictactoe - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{AppConfig, Cli, CliCommand, TerminalView, run_play, run_selfplay};
use tictactoe_core::{EventBus, Game, SetupConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        CliCommand::Play {
            player1,
            player2,
            ai,
        } => {
            let mut setup = config.setup().clone();
            if let Some(name) = player1 {
                setup = setup.with_player1(name);
            }
            if let Some(name) = player2 {
                setup = setup.with_player2(name);
            }
            if ai {
                setup = setup.with_ai_game(true);
            }
            play(&config, &setup)
        }
        CliCommand::Selfplay => {
            let view = TerminalView::new(std::io::stdout(), *config.display().format());
            run_selfplay(view)?;
            Ok(())
        }
    }
}

/// Reads the config file if one was given and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::default(),
    };

    Ok(match cli.format {
        Some(format) => config.with_format(format),
        None => config,
    })
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(config))]
fn play(config: &AppConfig, setup: &SetupConfig) -> Result<()> {
    let mut bus = EventBus::new();
    bus.subscribe(TerminalView::new(
        std::io::stdout(),
        *config.display().format(),
    ));

    let mut game = Game::with_bus(bus);
    game.setup_game(setup);

    let status = run_play(&mut game, std::io::stdin().lock(), std::io::stdout())?;
    info!(?status, "Leaving game");
    Ok(())
}
