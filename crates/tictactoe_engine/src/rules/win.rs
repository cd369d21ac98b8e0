//! Win detection logic for tic-tac-toe.
//!
//! Every occupied cell is treated as a potential line origin. From each origin
//! the four [`Direction`]s are probed by stepping twice; a line is complete
//! when both steps stay on the board and match the origin's mark. Origins are
//! visited in row-major order and directions in declaration order, and the
//! first complete line is reported.

use crate::coord::{Coord, Direction};
use crate::outcome::WinResult;
use crate::types::Board;
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Cells in a winning line.
const LINE_LENGTH: usize = 3;

/// Checks if there is a winner on the board.
///
/// Returns the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<WinResult> {
    Coord::ALL.iter().find_map(|origin| {
        Direction::iter().find_map(|direction| probe(board, *origin, direction))
    })
}

/// Probes a single line starting at `origin`.
///
/// Returns `None` if the origin is empty, a step leaves the board, or a
/// stepped-to cell holds a different mark.
pub fn probe(board: &Board, origin: Coord, direction: Direction) -> Option<WinResult> {
    let symbol = board.get(origin).player()?;

    let mut cells = [origin; LINE_LENGTH];
    let mut current = origin;
    for slot in cells.iter_mut().skip(1) {
        current = current.step(direction)?;
        if board.get(current).player() != Some(symbol) {
            return None;
        }
        *slot = current;
    }

    trace!(%origin, %direction, ?symbol, "Complete line found");
    Some(WinResult::new(symbol, cells, direction))
}
