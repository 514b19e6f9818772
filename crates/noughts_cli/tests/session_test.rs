//! End-to-end session tests over in-memory consoles.

use anyhow::Result;
use noughts_cli::{Console, GameLoop, HumanPlayer, Player, ScriptedPlayer};
use noughts_core::{GameStatus, Mark, Move};

type TestPlayer = Box<dyn Player<&'static [u8], Vec<u8>>>;

fn human_pair() -> [TestPlayer; 2] {
    [
        Box::new(HumanPlayer::new("P1", Mark::O)),
        Box::new(HumanPlayer::new("P2", Mark::X)),
    ]
}

/// Runs a full session fed by `input` and returns the outcome plus
/// everything written to the console.
async fn run_session(input: &'static str) -> (Result<GameStatus>, String) {
    let console = Console::new(input.as_bytes(), Vec::new()).clear_screen(false);
    let mut session = GameLoop::new(console, human_pair());
    let outcome = session.run().await;
    let written = String::from_utf8_lossy(session.into_console().writer()).into_owned();
    (outcome, written)
}

#[tokio::test]
async fn first_player_wins_the_top_row() {
    let (outcome, written) = run_session("1a\n2a\n1b\n2b\n1c\n").await;
    assert_eq!(outcome.unwrap(), GameStatus::Won(Mark::O));
    assert!(written.contains("P1 (O) - enter your move (e.g., 1a, 2c): "));
    assert!(written.contains("P2 (X) - enter your move (e.g., 1a, 2c): "));
    assert!(written.contains("P1 (O) wins!"));
}

#[tokio::test]
async fn occupied_cell_keeps_the_turn_with_the_same_player() {
    // P2's first attempt repeats 1a and must be retried.
    let (outcome, written) = run_session("1a\n1a\n2a\n1b\n2b\n1c\n").await;
    assert_eq!(outcome.unwrap(), GameStatus::Won(Mark::O));
    assert!(written.contains("Invalid move. That cell is already taken or out of range."));
    assert_eq!(written.matches("P2 (X) - enter your move").count(), 3);
    assert_eq!(written.matches("P1 (O) - enter your move").count(), 3);
}

#[tokio::test]
async fn malformed_input_is_retried_without_consuming_the_turn() {
    let (outcome, written) = run_session("zz\n1a\n2a\n1b\n2b\n1c\n").await;
    assert_eq!(outcome.unwrap(), GameStatus::Won(Mark::O));
    assert!(written.contains("Invalid format. Please use row(1-3) + column(a-c), like 2b."));
    assert!(written.contains("P1 (O) wins!"));
}

#[tokio::test]
async fn full_board_without_a_line_ends_in_a_draw() {
    // O X O
    // O X X
    // X O O  -- no uniform line for either mark
    let (outcome, written) = run_session("1a\n1b\n1c\n2b\n2a\n2c\n3b\n3a\n3c\n").await;
    assert_eq!(outcome.unwrap(), GameStatus::Draw);
    assert!(written.contains("It's a draw!"));
}

#[tokio::test]
async fn closing_input_mid_game_fails_the_session() {
    let (outcome, written) = run_session("1a\n").await;
    let err = outcome.unwrap_err();
    assert!(err.to_string().contains("input closed"));
    // The first move still made it onto a frame.
    assert!(written.contains("1 | O |   |   |"));
}

#[tokio::test]
async fn scripted_players_replay_a_game() {
    let first: TestPlayer = Box::new(ScriptedPlayer::new(
        "Rerun-O",
        Mark::O,
        [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    ));
    // The opening scripted move repeats 1a and gets rejected; the retry
    // consumes the next scripted move.
    let second: TestPlayer = Box::new(ScriptedPlayer::new(
        "Rerun-X",
        Mark::X,
        [Move::new(0, 0), Move::new(1, 0), Move::new(1, 1)],
    ));

    let console = Console::new(b"".as_slice(), Vec::new()).clear_screen(false);
    let mut session = GameLoop::new(console, [first, second]);
    let outcome = session.run().await.unwrap();
    let written = String::from_utf8_lossy(session.into_console().writer()).into_owned();

    assert_eq!(outcome, GameStatus::Won(Mark::O));
    assert!(written.contains("Invalid move. That cell is already taken or out of range."));
    assert!(written.contains("1 | O | O | O |"));
    assert!(written.contains("Rerun-O (O) wins!"));
}

#[tokio::test]
async fn exhausted_script_fails_the_session() {
    let first: TestPlayer = Box::new(ScriptedPlayer::new("Rerun-O", Mark::O, [Move::new(0, 0)]));
    let second: TestPlayer = Box::new(ScriptedPlayer::new("Rerun-X", Mark::X, []));

    let console = Console::new(b"".as_slice(), Vec::new()).clear_screen(false);
    let mut session = GameLoop::new(console, [first, second]);
    let err = session.run().await.unwrap_err();
    assert!(err.to_string().contains("ran out of moves"));
}
