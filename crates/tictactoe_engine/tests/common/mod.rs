//! Shared helpers for integration tests.

#![allow(dead_code)]

use tictactoe_engine::{BoardEngine, Coord, MoveOutcome};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shorthand for an in-range coordinate.
pub fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("test coordinate in range")
}

/// Plays `moves` in order, asserting each one is applied.
pub fn play_all(engine: &mut BoardEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        assert_eq!(
            engine.apply_move(at(row, col)),
            MoveOutcome::Applied,
            "move ({}, {}) was rejected",
            row,
            col
        );
    }
}
