//! Player implementations for game sessions.

mod human;
mod scripted;

pub use human::HumanPlayer;
pub use scripted::ScriptedPlayer;

use crate::console::Console;
use anyhow::Result;
use noughts_core::{Board, Mark, Move};

/// A participant in a game.
///
/// The session loop only cares that a move arrives; how it is produced,
/// by prompting at the console or replaying a script, is up to the
/// implementation. Implementations should not validate against the board
/// beyond what they need: the engine is the judge of legality.
#[async_trait::async_trait]
pub trait Player<R, W>: Send {
    /// Produces the player's next move.
    async fn next_move(&mut self, board: &Board, console: &mut Console<R, W>) -> Result<Move>;

    /// Display name, shown in prompts and result lines.
    fn name(&self) -> &str;

    /// The mark this player places.
    fn mark(&self) -> Mark;
}
