//! Pure tic-tac-toe rules for a fixed 3x3 board.
//!
//! The crate owns board state and the turn machine: it validates moves,
//! detects wins and draws, and renders the grid as plain display lines.
//! No I/O happens here; prompting and terminal control belong to the
//! front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod types;

// Rule evaluation stays addressable as a module
pub mod rules;

// Crate-level exports, flattened for ergonomic use
pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use types::{Board, Cell, Mark};
