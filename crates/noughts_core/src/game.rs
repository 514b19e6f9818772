//! Turn and terminal-state machine over the board.

use crate::action::{Move, MoveError};
use crate::types::{Board, Cell, Mark, SIDE};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One game of tic-tac-toe: the board plus whose turn it is and whether
/// the game has ended.
///
/// [`Game::play`] is the only mutation path. A rejected move leaves the
/// game untouched, so the caller can let the same player retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
}

impl Game {
    /// Creates a game on an empty board, with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next. Stale once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Validates and applies a move for the mark whose turn it is.
    ///
    /// Checks run in order: the game must be in progress, the cell in
    /// range, the cell empty. After a valid move the status is settled
    /// (win before draw) and the turn passes only when the game is still
    /// running.
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "move submitted after the game ended");
            return Err(MoveError::Finished);
        }
        if mov.row >= SIDE || mov.col >= SIDE {
            return Err(MoveError::OutOfRange {
                row: mov.row,
                col: mov.col,
            });
        }
        if !self.board.is_valid_move(mov.row, mov.col) {
            return Err(MoveError::Taken {
                row: mov.row,
                col: mov.col,
            });
        }

        let mover = self.to_move;
        self.board.apply_move(mov, mover);

        if self.board.check_win(mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mover.opponent();
        }

        self.assert_consistent(mov, mover);
        Ok(())
    }

    /// Debug-build checks after a transition.
    fn assert_consistent(&self, mov: Move, mover: Mark) {
        debug_assert_eq!(self.board.cell(mov.row, mov.col), Some(Cell::Marked(mover)));
        debug_assert!(
            marks_balanced(&self.board),
            "mark counts drifted out of balance"
        );
    }
}

/// Alternating turns keep the two mark counts within one of each other.
fn marks_balanced(board: &Board) -> bool {
    let count = |mark: Mark| {
        board
            .cells()
            .iter()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    };
    count(Mark::X).abs_diff(count(Mark::O)) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Mark::X).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn balanced_counts_hold_through_a_game() {
        let mut game = Game::new(Mark::X);
        for mov in [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)] {
            game.play(mov).unwrap();
            assert!(marks_balanced(game.board()));
        }
    }
}
