//! Core types for the 3x3 board.

use crate::action::Move;
use serde::{Deserialize, Serialize};

/// Cells per side of the board.
pub(crate) const SIDE: usize = 3;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The X mark.
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

/// The 3x3 grid, stored row-major.
///
/// The board only answers questions about cells and lines. Whose turn it
/// is and whether the game has ended live in [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIDE * SIDE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIDE * SIDE],
        }
    }

    /// Returns true when `(row, col)` is on the board and the cell is empty.
    ///
    /// Safe to call with arbitrary coordinates.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < SIDE && col < SIDE && self.cells[row * SIDE + col] == Cell::Empty
    }

    /// Places `mark` at the move's cell.
    ///
    /// Callers must have checked [`Board::is_valid_move`] first; violating
    /// that is a bug in the caller, not a runtime condition.
    pub fn apply_move(&mut self, mov: Move, mark: Mark) {
        debug_assert!(
            self.is_valid_move(mov.row, mov.col),
            "apply_move called with unvalidated move {mov}"
        );
        self.cells[mov.row * SIDE + mov.col] = Cell::Marked(mark);
    }

    /// Returns true when `mark` holds a complete row, column, or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        crate::rules::check_win(self, mark)
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < SIDE && col < SIDE {
            Some(self.cells[row * SIDE + col])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIDE * SIDE] {
        &self.cells
    }

    /// Renders the board as display lines: a column header, then each row
    /// framed by `+---+` borders.
    ///
    /// ```text
    ///     a   b   c
    ///   +---+---+---+
    /// 1 | X |   | O |
    ///   +---+---+---+
    /// ```
    pub fn render(&self) -> Vec<String> {
        const BORDER: &str = "  +---+---+---+";
        let mut lines = Vec::with_capacity(2 + SIDE * 2);
        lines.push("    a   b   c".to_string());
        lines.push(BORDER.to_string());
        for row in 0..SIDE {
            lines.push(format!(
                "{} | {} | {} | {} |",
                row + 1,
                glyph(self.cells[row * SIDE]),
                glyph(self.cells[row * SIDE + 1]),
                glyph(self.cells[row * SIDE + 2]),
            ));
            lines.push(BORDER.to_string());
        }
        lines
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Marked(Mark::X) => 'X',
        Cell::Marked(Mark::O) => 'O',
    }
}
