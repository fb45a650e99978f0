//! Tests for the terminal game loops.

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;
use tictactoe_cli::{AppConfig, OutputFormat, TerminalView, run_play, run_selfplay};
use tictactoe_core::{EventBus, Game, GameStatus, SetupConfig, Symbol};

/// Writer shared between the view and the prompt stream.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn game_with_view(setup: &SetupConfig, out: &SharedBuffer, format: OutputFormat) -> Game {
    let mut bus = EventBus::new();
    bus.subscribe(TerminalView::new(out.clone(), format));
    let mut game = Game::with_bus(bus);
    game.setup_game(setup);
    game
}

#[test]
fn test_two_humans_play_to_a_win() {
    let out = SharedBuffer::default();
    let mut game = game_with_view(&SetupConfig::new("Alice", "Bob", false), &out, OutputFormat::Text);

    let input = Cursor::new("0 0\n1 1\n0 1\n2 2\n0 2\nquit\n");
    let status = run_play(&mut game, input, out.clone()).unwrap();

    assert_eq!(status, GameStatus::Won(Symbol::X));
    let text = out.contents();
    assert!(text.contains("Alice has won the game!"));
    assert!(text.contains("X|X|X"));
    assert!(text.contains("Bob (O) to move: "));
}

#[test]
fn test_bad_input_and_taken_squares_are_reported() {
    let out = SharedBuffer::default();
    let mut game = game_with_view(&SetupConfig::new("Alice", "Bob", false), &out, OutputFormat::Text);

    let input = Cursor::new("center\n5\nsideways\n7 7\n");
    let status = run_play(&mut game, input, out.clone()).unwrap();

    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.board().empty_positions().len(), 8);
    assert_eq!(game.current_player().name(), "Bob");

    let text = out.contents();
    assert!(text.contains("Square Center is already occupied. Try again."));
    assert!(text.contains("Unrecognised input 'sideways'"));
    assert!(text.contains("Position (7, 7) is off the board"));
}

#[test]
fn test_computer_answers_each_move() {
    let out = SharedBuffer::default();
    let mut game = game_with_view(&SetupConfig::new("Alice", "", true), &out, OutputFormat::Json);

    let status = run_play(&mut game, Cursor::new("1 1\nq\n"), out.clone()).unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.board().empty_positions().len(), 7);

    let events = out
        .contents()
        .lines()
        .filter(|line| line.contains("\"board_updated\""))
        .count();
    // Setup, Alice's move and the computer's reply.
    assert_eq!(events, 3);
}

#[test]
fn test_reset_starts_over() {
    let out = SharedBuffer::default();
    let mut game = game_with_view(&SetupConfig::new("Alice", "Bob", false), &out, OutputFormat::Text);

    let input = Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\n4 4\nreset\n");
    run_play(&mut game, input, out.clone()).unwrap();

    assert_eq!(game.board().empty_positions().len(), 9);
    assert_eq!(game.current_player().name(), "Alice");
    assert!(out.contents().contains("The game is over."));
}

#[test]
fn test_selfplay_ends_in_draw() {
    let out = SharedBuffer::default();
    let status = run_selfplay(TerminalView::new(out.clone(), OutputFormat::Text)).unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert!(out.contents().ends_with("It's a draw!\n"));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictactoe.toml");
    std::fs::write(
        &path,
        "[setup]\nplayer1 = \"Alice\"\nai_game = true\n\n[display]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.setup(), &SetupConfig::new("Alice", "", true));
    assert_eq!(*config.display().format(), OutputFormat::Json);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
