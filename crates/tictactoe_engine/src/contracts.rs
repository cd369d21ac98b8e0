//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition rejects the move without touching
//! the engine; a failed postcondition means the engine itself is broken.

use crate::error::MoveRejection;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::{BoardEngine, Coord};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Reason an action is refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(engine: &BoardEngine) -> Result<(), MoveRejection> {
        if engine.is_complete() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(engine))]
    pub fn check(coord: Coord, engine: &BoardEngine) -> Result<(), MoveRejection> {
        if engine.board().is_empty(coord) {
            Ok(())
        } else {
            Err(MoveRejection::CellOccupied(coord))
        }
    }
}

/// Composite precondition: the game is live and the cell is free.
///
/// Game over is reported ahead of an occupied cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(coord: Coord, engine: &BoardEngine) -> Result<(), MoveRejection> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(coord, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Game is not over
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one empty cell became the mover's mark; no other cell changed
/// - The turn passed to the opponent
/// - All [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<BoardEngine, Coord> for MoveContract {
    type Rejection = MoveRejection;

    fn pre(engine: &BoardEngine, coord: &Coord) -> Result<(), MoveRejection> {
        LegalMove::check(*coord, engine)
    }

    fn post(before: &BoardEngine, after: &BoardEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let mover = before.current_turn();
        let changed: Vec<Coord> = Coord::ALL
            .iter()
            .copied()
            .filter(|coord| before.cell_at(*coord) != after.cell_at(*coord))
            .collect();
        let single_placement = match changed.as_slice() {
            [coord] => before.board().is_empty(*coord) && after.cell_at(*coord).player() == Some(mover),
            _ => false,
        };
        if !single_placement {
            warn!(changed = changed.len(), "Move changed the board unexpectedly");
            violations.push(InvariantViolation::new(
                "A move fills exactly one empty cell with the mover's mark",
            ));
        }

        if after.current_turn() != mover.opponent() {
            violations.push(InvariantViolation::new("A move passes the turn"));
        }

        if let Err(mut broken) = EngineInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
