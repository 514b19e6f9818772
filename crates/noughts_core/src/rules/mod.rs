//! Rule evaluation for the 3x3 grid.
//!
//! Pure functions over board state, kept separate from board storage so
//! positions can be scored without going through the mutation paths.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_win;
