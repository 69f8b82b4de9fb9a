//! Tic-tac-toe against a minimax opponent.

mod action;
mod engine;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{MoveError, Turn};
pub use engine::GameEngine;
pub use position::Position;
pub use search::{SearchStrategy, WIN_SCORE, minimax, score_moves, select_opponent_move};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, GameOutcome, Player, Snapshot};
