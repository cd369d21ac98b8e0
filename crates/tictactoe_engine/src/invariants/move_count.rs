//! Move count invariant: every mark on the board came from one move.

use super::Invariant;
use crate::{BoardEngine, Coord};

/// Invariant: marks on the board equal moves played, and never exceed 9.
pub struct MoveCountInvariant;

impl Invariant<BoardEngine> for MoveCountInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        engine.moves_played() <= Coord::ALL.len() && engine.board().marks() == engine.moves_played()
    }

    fn description() -> &'static str {
        "Marks on the board match the number of moves played"
    }
}
