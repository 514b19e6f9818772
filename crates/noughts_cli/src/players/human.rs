//! The human player: moves arrive by prompting at the console.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use noughts_core::{Board, Mark, Move};
use tokio::io::{AsyncRead, AsyncWrite};

/// A player who types moves at the console.
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a human player with a display name and a mark.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Player<R, W> for HumanPlayer
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn next_move(&mut self, _board: &Board, console: &mut Console<R, W>) -> Result<Move> {
        let prompt = format!(
            "{} ({}) - enter your move (e.g., 1a, 2c): ",
            self.name, self.mark
        );
        console.request_move(&prompt).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
