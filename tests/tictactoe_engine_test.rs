//! Tests for the human-versus-minimax game engine.

use unbeatable_tictactoe::{
    Board, Cell, GameEngine, GameOutcome, MoveError, Position, SearchStrategy, minimax,
};

/// Plays every legal human sequence from `engine`, collecting final outcomes.
fn play_out(engine: &GameEngine, outcomes: &mut Vec<GameOutcome>) {
    for index in engine.board().empty_cells() {
        let mut next = engine.clone();
        let snapshot = next.apply_human_move(index);
        if snapshot.outcome().is_terminal() {
            outcomes.push(*snapshot.outcome());
        } else {
            play_out(&next, outcomes);
        }
    }
}

/// The human's minimax-optimal move: the cell leaving the opponent the lowest score.
fn best_human_move(board: &Board) -> usize {
    let mut best: Option<(usize, i32)> = None;
    for index in board.empty_cells() {
        let mut scratch = *board;
        scratch.set(index, Cell::Human).unwrap();
        let score = minimax(&mut scratch, 0, true);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }
    best.expect("board has an empty cell").0
}

#[test]
fn test_opponent_never_loses() {
    for strategy in [SearchStrategy::Exhaustive, SearchStrategy::AlphaBeta] {
        let mut outcomes = Vec::new();
        play_out(&GameEngine::with_strategy(strategy), &mut outcomes);

        assert_eq!(outcomes.len(), 569, "{strategy}");
        assert!(!outcomes.contains(&GameOutcome::HumanWin), "{strategy}");
        assert!(outcomes.contains(&GameOutcome::Draw));
        assert!(outcomes.contains(&GameOutcome::OpponentWin));
    }
}

#[test]
fn test_perfect_play_from_center_draws() {
    let mut engine = GameEngine::new();
    let mut snapshot = engine.apply_human_move(Position::Center.to_index());
    while !snapshot.outcome().is_terminal() {
        snapshot = engine.apply_human_move(best_human_move(snapshot.board()));
    }
    assert_eq!(*snapshot.outcome(), GameOutcome::Draw);
    assert_eq!(snapshot.board().empty_cells().count(), 0);
}

#[test]
fn test_corner_opening_gets_center_reply() {
    let mut engine = GameEngine::new();
    let snapshot = engine.apply_human_move(0);

    assert_eq!(*snapshot.outcome(), GameOutcome::InProgress);
    assert_eq!(snapshot.board().get(0), Some(Cell::Human));
    assert_eq!(snapshot.board().get(4), Some(Cell::Opponent));
    assert_eq!(snapshot.board().count(Cell::Empty), 7);
}

#[test]
fn test_human_win_skips_opponent_reply() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut engine = GameEngine::from_board(board, SearchStrategy::Exhaustive);
    let snapshot = engine.apply_human_move(2);

    assert_eq!(*snapshot.outcome(), GameOutcome::HumanWin);
    let mut expected = board;
    expected.set(2, Cell::Human).unwrap();
    assert_eq!(*snapshot.board(), expected);
}

#[test]
fn test_human_win_on_full_board_beats_draw() {
    // X O X / O X O / O X _ : the last cell completes the diagonal.
    let board: Board = "XOX/OXO/OX.".parse().unwrap();
    let mut engine = GameEngine::from_board(board, SearchStrategy::Exhaustive);
    let turn = engine.try_human_move(8).unwrap();

    assert_eq!(*turn.snapshot().outcome(), GameOutcome::HumanWin);
    assert_eq!(*turn.opponent_move(), None);
    assert!(turn.snapshot().board().empty_cells().next().is_none());
}

#[test]
fn test_last_cell_without_line_is_draw() {
    // X O X / X O O / O X _ : filling 8 makes no line.
    let board: Board = "XOX/XOO/OX.".parse().unwrap();
    let mut engine = GameEngine::from_board(board, SearchStrategy::Exhaustive);
    assert_eq!(*engine.apply_human_move(8).outcome(), GameOutcome::Draw);
}

#[test]
fn test_opponent_takes_winning_reply() {
    // Human X at 3, 5; opponent O at 4, 6. Human plays 7, opponent wins on 2.
    let board: Board = ".../XOX/O..".parse().unwrap();
    let mut engine = GameEngine::from_board(board, SearchStrategy::Exhaustive);
    let turn = engine.try_human_move(7).unwrap();

    assert_eq!(*turn.opponent_move(), Some(Position::TopRight));
    assert_eq!(*turn.snapshot().outcome(), GameOutcome::OpponentWin);
}

#[test]
fn test_invalid_moves_are_no_ops() {
    let mut engine = GameEngine::new();
    let first = engine.apply_human_move(0);

    assert_eq!(engine.apply_human_move(0), first);
    assert_eq!(engine.apply_human_move(4), first);
    assert_eq!(engine.apply_human_move(9), first);
    assert_eq!(engine.apply_human_move(usize::MAX), first);
    assert_eq!(
        engine.try_human_move(9),
        Err(MoveError::OutOfRange(9))
    );
}

#[test]
fn test_terminal_state_is_absorbing() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut engine = GameEngine::from_board(board, SearchStrategy::Exhaustive);
    let finished = engine.apply_human_move(2);
    assert_eq!(*finished.outcome(), GameOutcome::HumanWin);

    for index in engine.board().empty_cells().collect::<Vec<_>>() {
        assert_eq!(engine.apply_human_move(index), finished);
        assert_eq!(
            engine.try_human_move(index),
            Err(MoveError::GameOver(GameOutcome::HumanWin))
        );
    }
}

#[test]
fn test_reset_from_any_state() {
    let mut engine = GameEngine::with_strategy(SearchStrategy::AlphaBeta);
    engine.reset();
    assert_eq!(engine.snapshot(), GameEngine::new().snapshot());

    // Play the human's cells in order until the game ends.
    let mut index = 0;
    while !engine.outcome().is_terminal() {
        engine.apply_human_move(index);
        index += 1;
    }
    assert_eq!(engine.outcome(), GameOutcome::OpponentWin);

    engine.reset();
    engine.reset();
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.outcome(), GameOutcome::InProgress);
    assert_eq!(engine.strategy(), SearchStrategy::AlphaBeta);

    // A fresh game plays normally after reset.
    assert_eq!(engine.apply_human_move(0).board().get(4), Some(Cell::Opponent));
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    let snapshot = engine.apply_human_move(4);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"outcome\":\"InProgress\""));
    let back: unbeatable_tictactoe::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
