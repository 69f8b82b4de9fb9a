//! Move results and rejections.
//!
//! A human move either produces a [`Turn`] describing both marks written
//! during the call, or a [`MoveError`] explaining why the engine refused it.

use super::position::Position;
use super::types::{GameOutcome, Snapshot};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything that happened during one accepted human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Turn {
    /// Where the human played.
    human_move: Position,
    /// The opponent's reply, absent when the human's move ended the game.
    opponent_move: Option<Position>,
    /// Board and outcome after the turn.
    snapshot: Snapshot,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You played {}", self.human_move.label())?;
        if let Some(reply) = self.opponent_move {
            write!(f, ", AI played {}", reply.label())?;
        }
        Ok(())
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameOutcome),
}

impl std::error::Error for MoveError {}
