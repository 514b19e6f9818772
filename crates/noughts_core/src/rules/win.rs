//! Win detection.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines, as flat indices into the row-major cell array.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Returns true when `mark` occupies every cell of at least one line.
#[instrument]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let owned = Cell::Marked(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.cells()[index] == owned))
}
