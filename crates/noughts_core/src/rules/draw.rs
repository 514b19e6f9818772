//! Draw detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Returns true when every cell holds a mark.
///
/// A full board is only a draw when neither mark has a winning line; that
/// combination is the engine's job to check, win first.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Cell::Empty)
}
