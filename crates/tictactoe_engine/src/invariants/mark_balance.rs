//! Mark balance invariant: X is never behind O and never two marks ahead.

use super::Invariant;
use crate::{BoardEngine, Cell};

/// Invariant: the X count equals the O count or exceeds it by one.
pub struct MarkBalanceInvariant;

impl Invariant<BoardEngine> for MarkBalanceInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let x = engine.board().count(Cell::X);
        let o = engine.board().count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
