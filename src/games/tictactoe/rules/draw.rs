//! Board-full detection for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (no empty cells).
///
/// A full board is only a draw when neither side has a line; callers check
/// lines first.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
