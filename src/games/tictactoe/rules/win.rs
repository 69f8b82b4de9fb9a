//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` holds all three cells of any line.
///
/// Called at every node of the opponent's search, so it stays free of spans.
pub fn has_winning_line(board: &Board, player: Player) -> bool {
    let mark = player.cell();
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}
