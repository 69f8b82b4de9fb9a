//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine and the search share these,
//! so a position is judged the same way whether it was played or imagined.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_winning_line};

use super::{Board, GameOutcome, Player};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A line outranks a full board, and the human's line is checked first,
/// matching the order the engine checks after each mark.
#[instrument]
pub fn evaluate(board: &Board) -> GameOutcome {
    if has_winning_line(board, Player::Human) {
        GameOutcome::HumanWin
    } else if has_winning_line(board, Player::Opponent) {
        GameOutcome::OpponentWin
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
