//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// This is the draw primitive: it does not look for a winning line. Callers
/// wanting a game result go through [`status`](super::status), which ranks a
/// win above a full board.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::rules::find_winner;
    use crate::types::{Cell, Player};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Coord::CENTER, Cell::from(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert!(is_full(&board));
        assert!(find_winner(&board).is_none());
    }

    #[test]
    fn test_full_board_with_line_is_still_full() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]).unwrap();
        assert!(is_full(&board));
        assert!(find_winner(&board).is_some());
    }
}
