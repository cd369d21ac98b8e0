//! Tic-tac-toe rule engine.
//!
//! The engine owns a 3x3 board, enforces move legality, alternates turns
//! starting with X, and detects wins and draws. Presentation is left to the
//! caller, which drives the engine through a small call surface:
//!
//! - [`BoardEngine::apply_move`] / [`BoardEngine::reset`] mutate state
//! - [`BoardEngine::cell_at`], [`BoardEngine::winner`],
//!   [`BoardEngine::is_draw`], [`BoardEngine::is_complete`],
//!   [`BoardEngine::completion_message`] and
//!   [`BoardEngine::is_winning_cell`] are pure queries
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{BoardEngine, Coord, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::CoordError> {
//! let mut engine = BoardEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.play(row, col)?;
//! }
//!
//! let win = engine.winner().expect("top row is complete");
//! assert_eq!(win.symbol(), Player::X);
//! assert_eq!(engine.completion_message(), Some("X Wins!"));
//! assert!(engine.is_winning_cell(Coord::new(0, 1)?));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod contracts;
mod coord;
mod engine;
mod error;
mod kani_support;
mod outcome;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use engine::{BoardEngine, EngineSnapshot};

// Crate-level exports - Domain types
pub use coord::{Coord, Direction};
pub use outcome::{GameStatus, MoveOutcome, WinResult};
pub use types::{Board, Cell, Player};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use invariants::{EngineInvariants, Invariant, InvariantSet, InvariantViolation};

// Crate-level exports - Configuration and errors
pub use config::{CompletionPolicy, ConfigError, EngineConfig};
pub use error::{BoardParseError, CoordError, MoveRejection};
