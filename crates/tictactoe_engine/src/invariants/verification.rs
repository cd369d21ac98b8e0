//! Formal verification of engine rules using the Kani model checker.
//!
//! These harnesses check properties for every board Kani can construct.

#[cfg(kani)]
mod proofs {
    use crate::invariants::{EngineInvariants, InvariantSet};
    use crate::rules::find_winner;
    use crate::{Board, BoardEngine, Coord, MoveOutcome};

    /// A legal move preserves every engine invariant.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_apply_move_preserves_invariants() {
        let mut engine: BoardEngine = kani::any();
        kani::assume(EngineInvariants::check_all(&engine).is_ok());

        let coord: Coord = kani::any();
        engine.apply_move(coord);

        assert!(
            EngineInvariants::check_all(&engine).is_ok(),
            "apply_move broke an invariant"
        );
    }

    /// A rejected move leaves the engine untouched.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_rejection_is_no_op() {
        let mut engine: BoardEngine = kani::any();
        kani::assume(EngineInvariants::check_all(&engine).is_ok());
        let before = engine.clone();

        let coord: Coord = kani::any();
        if engine.apply_move(coord) != MoveOutcome::Applied {
            assert!(engine == before, "Rejected move changed the engine");
        }
    }

    /// Any reported line is three identical marks.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_winner_is_uniform_line() {
        let board: Board = kani::any();
        if let Some(win) = find_winner(&board) {
            for coord in win.cells() {
                assert!(board.get(coord).player() == Some(win.symbol()));
            }
        }
    }
}
