//! Console front end for noughts.
//!
//! Wires the pure engine from `noughts_core` to a terminal: a prompt
//! loop that parses typed moves, a board renderer with optional screen
//! clearing, and a session driver that alternates two players until the
//! game ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod game_loop;
mod input;
mod players;

// Crate-level exports, flattened for ergonomic use
pub use cli::Cli;
pub use console::Console;
pub use game_loop::GameLoop;
pub use input::parse_move;
pub use players::{HumanPlayer, Player, ScriptedPlayer};
