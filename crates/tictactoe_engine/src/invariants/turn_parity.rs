//! Turn parity invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{BoardEngine, Player};

/// Invariant: X is to move exactly when an even number of marks is placed.
///
/// Play starts with X and every applied move passes the turn, so the player
/// to move is determined by the number of marks on the board.
pub struct TurnParityInvariant;

impl Invariant<BoardEngine> for TurnParityInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let expected = if engine.board().marks() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.current_turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
