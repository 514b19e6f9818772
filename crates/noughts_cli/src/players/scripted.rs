//! The scripted player: moves arrive from a predetermined sequence.

use super::Player;
use crate::console::Console;
use anyhow::{Context, Result};
use noughts_core::{Board, Mark, Move};
use std::collections::VecDeque;
use tracing::debug;

/// Plays a fixed sequence of moves without touching the console.
///
/// Used to replay recorded games and to drive sessions in tests. Since a
/// rejected move stays consumed, scripts must account for retries. Fails
/// once the script runs out.
pub struct ScriptedPlayer {
    name: String,
    mark: Mark,
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    /// Creates a scripted player that plays `moves` in order.
    pub fn new(name: impl Into<String>, mark: Mark, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            mark,
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves left in the script.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

#[async_trait::async_trait]
impl<R, W> Player<R, W> for ScriptedPlayer
where
    R: Send,
    W: Send,
{
    async fn next_move(&mut self, _board: &Board, _console: &mut Console<R, W>) -> Result<Move> {
        let mov = self
            .moves
            .pop_front()
            .with_context(|| format!("script for {} ran out of moves", self.name))?;
        debug!(player = %self.name, %mov, "scripted move");
        Ok(mov)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
