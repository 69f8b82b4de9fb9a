//! Unbeatable Tic-Tac-Toe - a human against a minimax opponent
//!
//! The [`GameEngine`] owns a 3x3 board. Each human move is validated and
//! applied, then answered by the opponent's optimal reply, found by searching
//! the whole remaining game tree.
//!
//! # Architecture
//!
//! - **Engine**: board ownership, move validation, terminal detection
//! - **Rules**: pure win and full-board checks shared with the search
//! - **Search**: depth-weighted minimax, optionally with alpha-beta pruning
//! - **Terminal**: a line-oriented client driven by [`PlayConfig`]
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Cell, GameEngine, GameOutcome};
//!
//! let mut engine = GameEngine::new();
//! let snapshot = engine.apply_human_move(0);
//! assert_eq!(snapshot.board().get(4), Some(Cell::Opponent));
//! assert_eq!(*snapshot.outcome(), GameOutcome::InProgress);
//!
//! // Occupied cells are ignored.
//! assert_eq!(engine.apply_human_move(4), snapshot);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod play_config;
pub mod terminal;

// Crate-level exports - Play configuration
pub use play_config::{ConfigError, PlayConfig};

// Crate-level exports - Terminal client
pub use terminal::OutputFormat;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, CELL_COUNT, Cell, GameEngine, GameOutcome, MoveError, Player,
    Position, SearchStrategy, Snapshot, Turn, WIN_SCORE, minimax, rules, score_moves,
    select_opponent_move,
};
