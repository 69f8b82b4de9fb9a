//! Game engine: the human against the minimax opponent.

use super::action::{MoveError, Turn};
use super::position::Position;
use super::rules::{evaluate, has_winning_line, is_full};
use super::search::SearchStrategy;
use super::types::{Board, GameOutcome, Player, Snapshot};
use tracing::{debug, info, instrument, warn};

/// Owns one game's board and outcome.
///
/// State changes only through [`GameEngine::apply_human_move`],
/// [`GameEngine::try_human_move`] and [`GameEngine::reset`]; everything else
/// reads copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    outcome: GameOutcome,
    strategy: SearchStrategy,
}

impl GameEngine {
    /// Creates an engine with an empty board and the exhaustive search.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that searches with `strategy`.
    #[instrument]
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Resumes a game from an existing board.
    ///
    /// The outcome is derived from the board, so a finished position starts
    /// out terminal.
    #[instrument(fields(board = %board))]
    pub fn from_board(board: Board, strategy: SearchStrategy) -> Self {
        let outcome = evaluate(&board);
        debug!(%outcome, "Resumed game from board");
        Self {
            board,
            outcome,
            strategy,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the search strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Returns a copy of the board and outcome.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.outcome)
    }

    /// Plays the human's mark at `index`, then the opponent's reply.
    ///
    /// Out-of-range indices, occupied cells and finished games are ignored:
    /// the returned snapshot is simply the unchanged state.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn apply_human_move(&mut self, index: usize) -> Snapshot {
        match self.try_human_move(index) {
            Ok(turn) => *turn.snapshot(),
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                self.snapshot()
            }
        }
    }

    /// Like [`GameEngine::apply_human_move`], but reports rejected moves.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching the state if the game is over,
    /// `index` is not 0-8, or the cell is occupied.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn try_human_move(&mut self, index: usize) -> Result<Turn, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        let human_move = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(human_move));
        }

        self.board.set(index, Player::Human.cell())?;
        debug!(position = %human_move, "Human moved");
        if self.settle(Player::Human) {
            return Ok(Turn::new(human_move, None, self.snapshot()));
        }

        let Some(reply) = self.strategy.select(&self.board) else {
            // Unreachable: a non-full board always has an empty cell.
            warn!(board = %self.board, "Search found no move on a non-full board");
            self.outcome = GameOutcome::Draw;
            return Ok(Turn::new(human_move, None, self.snapshot()));
        };
        self.board.set(reply, Player::Opponent.cell())?;
        let opponent_move = Position::from_index(reply);
        debug!(position = ?opponent_move, "Opponent moved");
        self.settle(Player::Opponent);

        Ok(Turn::new(human_move, opponent_move, self.snapshot()))
    }

    /// Clears the board and starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = Board::new();
        self.outcome = GameOutcome::InProgress;
    }

    /// Updates the outcome after `player` moved. Returns true if the game ended.
    fn settle(&mut self, player: Player) -> bool {
        if has_winning_line(&self.board, player) {
            self.outcome = match player {
                Player::Human => GameOutcome::HumanWin,
                Player::Opponent => GameOutcome::OpponentWin,
            };
        } else if is_full(&self.board) {
            self.outcome = GameOutcome::Draw;
        }

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, board = %self.board, "Game over");
        }
        self.outcome.is_terminal()
    }
}
