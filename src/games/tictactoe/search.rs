//! Minimax move selection for the opponent.
//!
//! Scores are from the opponent's point of view: a win found `depth` plies
//! below the candidate move scores `10 - depth`, a loss `depth - 10`, a full
//! board `0`. Shallower wins therefore outrank deeper ones and deeper losses
//! outrank shallower ones.
//!
//! The search places a mark, recurses, and clears the mark again on a single
//! scratch board, so no node allocates.

use super::rules::{has_winning_line, is_full};
use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// How the opponent explores the game tree.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    /// Visit every node.
    #[default]
    Exhaustive,
    /// Skip subtrees that cannot change the chosen move.
    AlphaBeta,
}

impl SearchStrategy {
    /// Picks the opponent's move, or `None` if the board is full.
    ///
    /// Cells are tried in ascending index order and a candidate replaces the
    /// current best only on a strictly higher score, so the lowest index wins
    /// any tie.
    #[instrument(skip(board), fields(board = %board))]
    pub fn select(self, board: &Board) -> Option<usize> {
        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;

        for index in board.empty_cells() {
            scratch.put(index, Cell::Opponent);
            let score = match self {
                SearchStrategy::Exhaustive => minimax(&mut scratch, 0, false),
                SearchStrategy::AlphaBeta => {
                    // Moves scoring at or below the current best are never
                    // chosen, so the best so far is a safe lower bound.
                    let alpha = best.map_or(i32::MIN, |(_, score)| score);
                    alpha_beta(&mut scratch, 0, false, alpha, i32::MAX)
                }
            };
            scratch.put(index, Cell::Empty);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        debug!(strategy = %self, choice = ?best, "Opponent move selected");
        best.map(|(index, _)| index)
    }
}

/// Picks the opponent's move with the exhaustive search.
pub fn select_opponent_move(board: &Board) -> Option<usize> {
    SearchStrategy::Exhaustive.select(board)
}

/// Exact minimax score of every empty cell, in ascending index order.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    board
        .empty_cells()
        .map(|index| {
            scratch.put(index, Cell::Opponent);
            let score = minimax(&mut scratch, 0, false);
            scratch.put(index, Cell::Empty);
            (index, score)
        })
        .collect()
}

fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    if has_winning_line(board, Player::Opponent) {
        Some(WIN_SCORE - depth)
    } else if has_winning_line(board, Player::Human) {
        Some(depth - WIN_SCORE)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// Minimax value of `board` with `depth` plies already played.
///
/// `maximizing` is true when the opponent is to move. The board is restored
/// before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let (mover, mut best) = if maximizing {
        (Cell::Opponent, i32::MIN)
    } else {
        (Cell::Human, i32::MAX)
    };

    for index in 0..board.cells().len() {
        if !board.is_empty(index) {
            continue;
        }
        board.put(index, mover);
        let score = minimax(board, depth + 1, !maximizing);
        board.put(index, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Fail-soft alpha-beta over the same scores as [`minimax`].
///
/// Returns the exact minimax value whenever it lies strictly inside
/// `(alpha, beta)`, and a bound on the correct side otherwise.
fn alpha_beta(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let mover = if maximizing { Cell::Opponent } else { Cell::Human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..board.cells().len() {
        if !board.is_empty(index) {
            continue;
        }
        board.put(index, mover);
        let score = alpha_beta(board, depth + 1, !maximizing, alpha, beta);
        board.put(index, Cell::Empty);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}
