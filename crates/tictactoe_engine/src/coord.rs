//! Board coordinates and probing directions.

use crate::error::CoordError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated `(row, col)` position on the board.
///
/// Rows and columns run `0..=2`, row 0 at the top and column 0 at the left.
/// A `Coord` can only be built in range, so every board access through one
/// is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Board side length.
    pub const SIZE: usize = 3;

    /// The center cell.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, failing if either component is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Self::at(row, col))
        } else {
            Err(CoordError::OutOfRange { row, col })
        }
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, CoordError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoordError::IndexOutOfRange(index))
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIZE + self.col
    }

    /// Label for this coordinate (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// Takes one step in `direction`, or `None` if that leaves the board.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < Self::SIZE && col < Self::SIZE).then(|| Self::at(row, col))
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Line orientation probed from an origin cell during win detection.
///
/// Each of the four covers one undirected line shape: vertical, the two
/// diagonals and horizontal. Iteration order is fixed and decides which line
/// is reported when several are complete.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 0 and the last column.
    UpRight,
    /// Toward the last column.
    Right,
    /// Toward the last row and the last column.
    DownRight,
}

impl Direction {
    /// `(row, col)` offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}
