//! Error types for coordinates, board parsing and move preconditions.
//!
//! Illegal moves never surface as errors from the engine: a failed
//! precondition becomes a [`MoveOutcome`] rejection and leaves state alone.

use crate::coord::Coord;
use crate::outcome::MoveOutcome;
use derive_more::{Display, Error};

/// Error building a [`Coord`](crate::Coord) from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    /// Row or column lies outside `0..=2`.
    #[display("Coordinate ({row}, {col}) is off the board (rows and columns are 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Row-major index lies outside `0..=8`.
    #[display("Cell index {_0} is off the board (must be 0-8)")]
    IndexOutOfRange(#[error(not(source))] usize),
}

/// Error parsing a [`Board`](crate::Board) from row strings.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A row did not hold exactly three cells.
    #[display("Row {row} has {len} cells, expected 3")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of characters found.
        len: usize,
    },

    /// A character was not `X`, `O`, `.` or a space.
    #[display("Unexpected mark {mark:?} in row {row}")]
    UnknownMark {
        /// Zero-based row index.
        row: usize,
        /// Offending character.
        mark: char,
    },
}

/// A failed move precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Coord),
}

impl From<MoveRejection> for MoveOutcome {
    fn from(rejection: MoveRejection) -> Self {
        match rejection {
            MoveRejection::GameOver => MoveOutcome::RejectedGameOver,
            MoveRejection::CellOccupied(_) => MoveOutcome::RejectedOccupied,
        }
    }
}
