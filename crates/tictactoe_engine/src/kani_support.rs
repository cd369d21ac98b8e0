//! Kani arbitrary implementations for engine types.
//!
//! These let Kani explore every value of our types during model checking.

#[cfg(kani)]
use crate::{Board, BoardEngine, Cell, Coord, Player};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Coord {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Coord::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.set(coord, kani::any());
        }
        board
    }
}

#[cfg(kani)]
impl kani::Arbitrary for BoardEngine {
    fn any() -> Self {
        let board: Board = kani::any();
        let turn: Player = kani::any();
        let moves_played: usize = kani::any();
        kani::assume(moves_played <= 9);

        // Bypasses normal construction so Kani also explores invalid states.
        BoardEngine::from_parts(board, turn, moves_played)
    }
}
