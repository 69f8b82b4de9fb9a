//! Tests for opponent move selection.

use unbeatable_tictactoe::{
    Board, CELL_COUNT, Cell, Player, SearchStrategy, WIN_SCORE, rules, score_moves,
    select_opponent_move,
};

/// Every board with the opponent to move and the game still open.
fn opponent_to_move_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    for code in 0..3usize.pow(CELL_COUNT as u32) {
        let mut board = Board::new();
        let mut rest = code;
        for index in 0..CELL_COUNT {
            let cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::Human,
                _ => Cell::Opponent,
            };
            board.set(index, cell).unwrap();
            rest /= 3;
        }
        if board.count(Cell::Human) == board.count(Cell::Opponent) + 1
            && rules::evaluate(&board) == unbeatable_tictactoe::GameOutcome::InProgress
        {
            boards.push(board);
        }
    }
    boards
}

#[test]
fn test_selected_cell_is_always_empty() {
    for board in opponent_to_move_boards() {
        let choice = select_opponent_move(&board).expect("open board has a move");
        assert!(board.is_empty(choice), "{board} -> {choice}");
    }
}

#[test]
fn test_alpha_beta_matches_exhaustive_everywhere() {
    for board in opponent_to_move_boards() {
        assert_eq!(
            SearchStrategy::AlphaBeta.select(&board),
            SearchStrategy::Exhaustive.select(&board),
            "{board}"
        );
    }
}

#[test]
fn test_selection_is_first_maximum() {
    for board in opponent_to_move_boards() {
        let scores = score_moves(&board);
        let best = scores.iter().map(|(_, score)| *score).max().unwrap();
        let first = scores.iter().find(|(_, score)| *score == best).unwrap().0;
        assert_eq!(select_opponent_move(&board), Some(first), "{board}");
    }
}

#[test]
fn test_empty_board_choice_is_stable() {
    let first = select_opponent_move(&Board::new());
    assert_eq!(first, Some(0));
    for _ in 0..5 {
        assert_eq!(select_opponent_move(&Board::new()), first);
    }
}

#[test]
fn test_full_board_has_no_move() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(select_opponent_move(&board), None);
}

#[test]
fn test_fastest_win_is_preferred() {
    // Cells 0 and 8 also win, two plies later; 2 wins at once.
    let board: Board = ".../XOX/OX.".parse().unwrap();
    let scores = score_moves(&board);
    assert!(scores.contains(&(0, WIN_SCORE - 2)));
    assert!(scores.contains(&(2, WIN_SCORE)));
    assert_eq!(select_opponent_move(&board), Some(2));

    let mut after = board;
    after.set(2, Cell::Opponent).unwrap();
    assert!(rules::has_winning_line(&after, Player::Opponent));
}

#[test]
fn test_slowest_loss_is_preferred() {
    // Human X at 5, 8 threatens column 2. Blocking at 2 still loses, but later.
    let board: Board = ".../..X/.OX".parse().unwrap();
    assert_eq!(
        score_moves(&board),
        vec![(0, -9), (1, -9), (2, -7), (3, -9), (4, -9), (6, -9)]
    );
    assert_eq!(select_opponent_move(&board), Some(2));
}
