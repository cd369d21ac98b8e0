//! End-to-end scenarios for the board engine.

mod common;

use common::{at, init_tracing, play_all};
use tictactoe_engine::{BoardEngine, Cell, Coord, Direction, GameStatus, MoveOutcome, Player};

#[test]
fn test_empty_board() {
    init_tracing();
    let engine = BoardEngine::new();

    assert_eq!(engine.winner(), None);
    assert!(!engine.is_draw());
    assert!(!engine.is_complete());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_turn(), Player::X);
}

#[test]
fn test_top_row_win() {
    init_tracing();
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let win = engine.winner().expect("X completed the top row");
    assert_eq!(win.symbol(), Player::X);
    assert_eq!(win.cells(), [at(0, 0), at(0, 1), at(0, 2)]);
    assert_eq!(win.direction(), Direction::Right);

    assert!(engine.is_complete());
    assert_eq!(engine.completion_message(), Some("X Wins!"));
    assert!(engine.is_winning_cell(at(0, 1)));
    assert!(!engine.is_winning_cell(at(1, 0)));
}

#[test]
fn test_full_board_draw() {
    init_tracing();
    // X O X / X O O / O X X
    let mut engine = BoardEngine::new();
    play_all(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(engine.cell_at(at(2, 0)), Cell::O);
    assert_eq!(engine.winner(), None);
    assert!(engine.is_draw());
    assert!(engine.is_complete());
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.completion_message(), Some("Draw!"));
    assert!(Coord::ALL.iter().all(|c| !engine.is_winning_cell(*c)));
}

#[test]
fn test_diagonal_win() {
    init_tracing();
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    let win = engine.winner().expect("X completed the diagonal");
    assert_eq!(win.symbol(), Player::X);
    assert_eq!(win.cells(), [at(0, 0), at(1, 1), at(2, 2)]);
    assert_eq!(win.direction(), Direction::DownRight);
}

#[test]
fn test_o_wins_column() {
    init_tracing();
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

    let win = engine.winner().expect("O completed the right column");
    assert_eq!(win.symbol(), Player::O);
    assert_eq!(win.cells(), [at(2, 2), at(1, 2), at(0, 2)]);
    assert_eq!(engine.completion_message(), Some("O Wins!"));
}

#[test]
fn test_moves_after_win_change_nothing() {
    init_tracing();
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let board = *engine.board();
    let turn = engine.current_turn();

    for coord in engine.board().empty_cells() {
        assert_eq!(engine.apply_move(coord), MoveOutcome::RejectedGameOver);
    }
    assert_eq!(*engine.board(), board);
    assert_eq!(engine.current_turn(), turn);
}

#[test]
fn test_win_on_last_move_is_won_and_full() {
    init_tracing();
    // X O X / O X O / O X X: the ninth move fills the board and the diagonal.
    let mut engine = BoardEngine::new();
    play_all(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(engine.is_draw());
    assert!(engine.winner().is_some());
    assert!(matches!(engine.status(), GameStatus::Won(_)));
    assert_eq!(engine.completion_message(), Some("X Wins!"));
}

#[test]
fn test_reset_restores_initial_state() {
    init_tracing();
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    engine.reset();

    assert_eq!(engine, BoardEngine::new());
    assert!(Coord::ALL.iter().all(|c| engine.cell_at(*c) == Cell::Empty));
    assert_eq!(engine.current_turn(), Player::X);
    assert!(!engine.is_complete());
    assert_eq!(engine.apply_move(at(0, 0)), MoveOutcome::Applied);
}
