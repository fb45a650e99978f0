//! Terminal rendering of game events.

use crate::OutputFormat;
use std::io::Write;
use tictactoe_core::{GameEvent, GameObserver, Grid, Square};
use tracing::warn;

/// Observer that writes every game event to a terminal stream.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn render(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => match event {
                GameEvent::BoardUpdated { grid } => {
                    writeln!(self.out, "{}\n", render_grid(grid))?;
                }
                GameEvent::GameOver { winner } => {
                    writeln!(self.out, "{}", game_over_message(winner.as_deref()))?;
                }
            },
        }
        self.out.flush()
    }
}

impl<W: Write> GameObserver for TerminalView<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to render event");
        }
    }
}

/// Draws the grid, numbering empty squares 1-9.
pub fn render_grid(grid: &Grid) -> String {
    grid.iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, square)| match square {
                    Square::Empty => (r * 3 + c + 1).to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Sentence announcing the result.
pub fn game_over_message(winner: Option<&str>) -> String {
    match winner {
        Some(name) => format!("{} has won the game!", name),
        None => "It's a draw!".to_string(),
    }
}
