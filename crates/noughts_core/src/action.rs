//! Moves and the errors produced when they are rejected.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A requested placement, addressed by zero-based row and column.
///
/// Carries no validity guarantee of its own: parsers and scripts can build
/// any coordinates, and the board answers whether they are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, `0` at the top.
    pub row: usize,
    /// Column index, `0` at the left.
    pub col: usize,
}

impl Move {
    /// Creates a move targeting `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    /// Formats in-range moves in input notation (`2b`), anything else as a
    /// raw coordinate pair.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.row, self.col) {
            (row @ 0..=2, col @ 0..=2) => {
                write!(f, "{}{}", row + 1, (b'a' + col as u8) as char)
            }
            (row, col) => write!(f, "({row}, {col})"),
        }
    }
}

/// Why the engine refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell is outside the 3x3 grid.
    #[display("cell ({row}, {col}) is out of range")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already taken")]
    Taken {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The game already reached a terminal state.
    #[display("game is already over")]
    Finished,
}
