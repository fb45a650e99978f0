//! Interactive and self-play game loops.

use crate::input::{Command, HELP, parse_command};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{ComputerPlayer, EventBus, Game, GameObserver, GameStatus, Symbol};
use tracing::{debug, info, instrument};

/// Reads commands from `input` until `quit` or end of input.
///
/// Board changes reach the terminal through the observers subscribed to
/// the game's bus; `out` only receives prompts and hints. Returns the status
/// of the board when the loop ended.
#[instrument(skip_all)]
pub fn run_play<R, W>(game: &mut Game, input: R, mut out: W) -> Result<GameStatus>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}\n", HELP)?;
    // A computer may hold the first turn.
    game.advance()?;
    prompt(game, &mut out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => {
                debug!("Player quit");
                break;
            }
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Reset) => {
                game.reset_game();
                game.advance()?;
            }
            Ok(Command::Move { row, col }) => {
                if game.is_over() {
                    writeln!(out, "The game is over.")?;
                } else if let Err(e) = game.make_move(row, col) {
                    writeln!(out, "{}. Try again.", e)?;
                }
            }
            Err(e) => writeln!(out, "{}. Type `help` for the accepted input.", e)?,
        }
        prompt(game, &mut out)?;
    }

    Ok(game.status())
}

/// Plays the computer against itself from an empty board.
#[instrument(skip_all)]
pub fn run_selfplay(observer: impl GameObserver + 'static) -> Result<GameStatus> {
    let mut bus = EventBus::new();
    bus.subscribe(observer);

    let mut game = Game::with_players(
        Box::new(ComputerPlayer::new(Symbol::X)),
        Box::new(ComputerPlayer::new(Symbol::O)),
        bus,
    );
    game.advance()?;

    let status = game.status();
    info!(?status, "Self-play finished");
    Ok(status)
}

fn prompt<W: Write>(game: &Game, out: &mut W) -> std::io::Result<()> {
    if game.is_over() {
        writeln!(out, "Type `reset` to play again or `quit` to leave.")?;
    } else {
        let player = game.current_player();
        write!(out, "{} ({}) to move: ", player.name(), player.symbol())?;
    }
    out.flush()
}
