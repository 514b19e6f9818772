//! Session driver: alternates two players over one game until it ends.

use crate::console::Console;
use crate::players::Player;
use anyhow::Result;
use noughts_core::{Game, GameStatus, Mark};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, instrument, warn};

/// Shown when a well-formed move targets an unplayable cell.
const INVALID_MOVE: &str = "Invalid move. That cell is already taken or out of range.";

/// Runs one game between two players over a console.
///
/// Owns the engine, the player pair, and the console for the duration of
/// the session. The player listed first moves first.
pub struct GameLoop<R, W> {
    game: Game,
    players: [Box<dyn Player<R, W>>; 2],
    console: Console<R, W>,
}

impl<R, W> GameLoop<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a session. The two players must carry different marks.
    pub fn new(console: Console<R, W>, players: [Box<dyn Player<R, W>>; 2]) -> Self {
        debug_assert_ne!(
            players[0].mark(),
            players[1].mark(),
            "both players carry the same mark"
        );
        let game = Game::new(players[0].mark());
        Self {
            game,
            players,
            console,
        }
    }

    /// Drives the game to a terminal state and returns it.
    ///
    /// Each iteration redraws the board, reports any rejection from the
    /// previous attempt, and asks the current player for a move. A
    /// rejected move keeps the turn with the same player; the loop only
    /// fails when a player can no longer produce moves at all.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "starting game"
        );
        let mut notice: Option<&str> = None;

        loop {
            self.console.draw_board(self.game.board()).await?;
            if let Some(message) = notice.take() {
                self.console.status(message).await?;
            }

            match self.game.status() {
                GameStatus::Won(mark) => {
                    let winner = self.player_name(mark).to_string();
                    self.console
                        .status(&format!("{winner} ({mark}) wins!"))
                        .await?;
                    info!(%winner, %mark, "game over");
                    return Ok(GameStatus::Won(mark));
                }
                GameStatus::Draw => {
                    self.console.status("It's a draw!").await?;
                    info!("game over: draw");
                    return Ok(GameStatus::Draw);
                }
                GameStatus::InProgress => {}
            }

            let mark = self.game.to_move();
            let current = self.index_of(mark);
            debug!(player = self.players[current].name(), %mark, "waiting for move");

            // Split borrows: the player mutates itself and the console,
            // while the engine only lends the board out.
            let mov = self.players[current]
                .next_move(self.game.board(), &mut self.console)
                .await?;

            match self.game.play(mov) {
                Ok(()) => {
                    debug!(player = self.players[current].name(), %mov, "move accepted");
                }
                Err(err) => {
                    warn!(player = self.players[current].name(), %mov, %err, "move rejected");
                    notice = Some(INVALID_MOVE);
                }
            }
        }
    }

    /// Consumes the session and hands the console back.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn index_of(&self, mark: Mark) -> usize {
        if self.players[0].mark() == mark { 0 } else { 1 }
    }

    fn player_name(&self, mark: Mark) -> &str {
        self.players[self.index_of(mark)].name()
    }
}
