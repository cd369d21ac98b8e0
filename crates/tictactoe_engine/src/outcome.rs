//! Derived results: wins, game status and move outcomes.
//!
//! None of these are stored by the engine. They are recomputed from the
//! board on every query.

use crate::coord::{Coord, Direction};
use crate::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct WinResult {
    /// Owner of the line.
    symbol: Player,
    /// The origin cell followed by the two cells stepped to.
    cells: [Coord; 3],
    /// Direction walked from the origin.
    direction: Direction,
}

impl WinResult {
    /// The winning player.
    pub fn symbol(&self) -> Player {
        self.symbol
    }

    /// Winning coordinates, origin first.
    pub fn cells(&self) -> [Coord; 3] {
        self.cells
    }

    /// Direction the line was found in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if `coord` is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Message announcing the winner.
    pub fn message(&self) -> &'static str {
        match self.symbol {
            Player::X => "X Wins!",
            Player::O => "O Wins!",
        }
    }
}

/// Current status of the game.
///
/// A win takes precedence over a draw: a full board holding a line is `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(WinResult),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true unless the game is still in progress.
    pub fn is_complete(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the win, if there is one.
    pub fn win(&self) -> Option<&WinResult> {
        match self {
            GameStatus::Won(win) => Some(win),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Completion message, or `None` while the game is in progress.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(win) => Some(win.message()),
            GameStatus::Draw => Some(DRAW_MESSAGE),
        }
    }
}

pub(crate) const DRAW_MESSAGE: &str = "Draw!";

/// What happened to a requested move.
///
/// Both rejections leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed.
    #[display("applied")]
    Applied,
    /// The game was already won or drawn.
    #[display("rejected: game is already over")]
    RejectedGameOver,
    /// The target cell already held a mark.
    #[display("rejected: cell is already occupied")]
    RejectedOccupied,
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(self) -> bool {
        self == MoveOutcome::Applied
    }
}
