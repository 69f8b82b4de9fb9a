//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The person at the keyboard (moves first).
    Human,
    /// The minimax opponent.
    Opponent,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Returns the cell value this player writes.
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Opponent => Cell::Opponent,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the opponent.
    Opponent,
}

impl Cell {
    /// Returns the compact character used by the board's text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Opponent => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), MoveError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        *slot = cell;
        Ok(())
    }

    /// Writes a cell the caller has already bounds-checked.
    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Formats the board as a grid, showing the index of every empty cell.
    pub fn render(&self, human_mark: char, opponent_mark: char) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => char::from_digit(index as u32, 10).unwrap_or('?'),
                    Cell::Human => human_mark,
                    Cell::Opponent => opponent_mark,
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    /// Compact form, `XX./OO./...`, accepted back by [`Board::from_str`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

/// Reasons a board string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("expected {expected} cells, got {got}")]
    InvalidLength {
        /// Cells required.
        expected: usize,
        /// Cells found.
        got: usize,
    },
    /// A character that is not a cell symbol.
    #[display("invalid cell character {character:?} at index {index}")]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Cell index it would have occupied.
        index: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().filter(|c| *c != '/').collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::InvalidLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (index, character) in symbols.into_iter().enumerate() {
            let cell = match character {
                'X' | 'x' => Cell::Human,
                'O' | 'o' => Cell::Opponent,
                '.' | '_' => Cell::Empty,
                _ => return Err(BoardParseError::InvalidCell { character, index }),
            };
            board.put(index, cell);
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GameOutcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The opponent completed a line.
    OpponentWin,
    /// Board filled with no line.
    Draw,
}

impl GameOutcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Message shown to the player once the game is over.
    pub fn verdict(self) -> Option<&'static str> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::HumanWin => Some("You Win!"),
            GameOutcome::OpponentWin => Some("AI Wins!"),
            GameOutcome::Draw => Some("Draw!"),
        }
    }
}

/// Immutable view of the engine's board and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// The outcome at the time of the snapshot.
    outcome: GameOutcome,
}
