//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules. Rules
//! are kept apart from the engine so invariants, contracts and harnesses can
//! evaluate arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{find_winner, probe};

use crate::outcome::GameStatus;
use crate::types::Board;
use tracing::instrument;

/// Aggregates win and draw detection into a status, wins first.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = find_winner(board) {
        GameStatus::Won(win)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
