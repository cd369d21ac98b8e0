//! The board engine: sole authority over game state and rule enforcement.
//!
//! The engine stores only the board, the player to move and a move counter.
//! Wins, draws and status are derived from the board on every query, so
//! there is nothing to invalidate when the board changes.

use crate::config::{CompletionPolicy, EngineConfig};
use crate::contracts::{Contract, MoveContract};
use crate::coord::Coord;
use crate::error::CoordError;
use crate::outcome::{DRAW_MESSAGE, GameStatus, MoveOutcome, WinResult};
use crate::rules;
use crate::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe rule engine.
///
/// Mutated only through [`reset`](Self::reset) and
/// [`apply_move`](Self::apply_move); every other method is a read-only
/// query. The engine has no internal locking: share it across threads only
/// behind external synchronization.
///
/// ```
/// use tictactoe_engine::{BoardEngine, Coord, MoveOutcome, Player};
///
/// let mut engine = BoardEngine::new();
/// assert_eq!(engine.apply_move(Coord::CENTER), MoveOutcome::Applied);
/// assert_eq!(engine.apply_move(Coord::CENTER), MoveOutcome::RejectedOccupied);
/// assert_eq!(engine.current_turn(), Player::O);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    turn: Player,
    moves_played: usize,
    config: EngineConfig,
}

impl BoardEngine {
    /// Creates an engine with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine using the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            moves_played: 0,
            config,
        }
    }

    /// Assembles an engine from raw parts without checking them.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(board: Board, turn: Player, moves_played: usize) -> Self {
        Self {
            board,
            turn,
            moves_played,
            config: EngineConfig::default(),
        }
    }

    /// Clears the board and gives the first move back to X.
    ///
    /// Configuration is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.moves_played = 0;
        debug!("Board reset");
    }

    /// Places the current player's mark at `coord` and passes the turn.
    ///
    /// A move on a finished game or an occupied cell changes nothing and is
    /// reported as a rejection; game over is checked first.
    #[instrument(skip(self, coord), fields(coord = %coord, player = %self.turn))]
    pub fn apply_move(&mut self, coord: Coord) -> MoveOutcome {
        if let Err(rejection) = MoveContract::pre(self, &coord) {
            debug!(%rejection, "Move rejected");
            return MoveOutcome::from(rejection);
        }

        let before = (*self.config.verify_invariants()).then(|| self.clone());

        self.board.set(coord, Cell::from(self.turn));
        self.turn = self.turn.opponent();
        self.moves_played += 1;
        debug!(moves_played = self.moves_played, "Move applied");

        if let Some(before) = before {
            self.verify_transition(&before);
        }

        match self.status() {
            GameStatus::Won(win) => info!(winner = %win.symbol(), direction = %win.direction(), "Game won"),
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress => {}
        }

        MoveOutcome::Applied
    }

    /// Validates raw numbers, then behaves like [`apply_move`](Self::apply_move).
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::OutOfRange`] if `row` or `col` is not in `0..=2`;
    /// the engine is left untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, CoordError> {
        let coord = Coord::new(row, col)?;
        Ok(self.apply_move(coord))
    }

    fn verify_transition(&self, before: &Self) {
        let result = MoveContract::post(before, self);
        if let Err(violations) = &result {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(violations = %descriptions, "Postcondition failed");
        }
        debug_assert!(result.is_ok(), "Postcondition failed: {:?}", result);
    }

    /// Returns the cell at `coord`.
    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.board.get(coord)
    }

    /// Returns the player whose mark the next legal move places.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied since the last reset.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the first complete line, if any.
    ///
    /// Recomputed from the board on every call.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<WinResult> {
        rules::find_winner(&self.board)
    }

    /// Returns true once no empty cells remain.
    ///
    /// This does not look for a winning line: a full board holding a line is
    /// both won and a draw here. Use [`status`](Self::status) for a single
    /// verdict where the win takes precedence.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Returns true if the game is won or the board is full.
    #[instrument(skip(self))]
    pub fn is_complete(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Returns the game status, ranking a win above a draw.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns `"X Wins!"`, `"O Wins!"` or `"Draw!"`.
    ///
    /// With [`CompletionPolicy::Lenient`] an unfinished game without a line
    /// reads `"Draw!"`. With [`CompletionPolicy::Strict`] the message is
    /// `None` until the game is complete.
    #[instrument(skip(self))]
    pub fn completion_message(&self) -> Option<&'static str> {
        match (self.status(), self.config.completion_policy()) {
            (GameStatus::InProgress, CompletionPolicy::Strict) => None,
            (GameStatus::InProgress, CompletionPolicy::Lenient) => Some(DRAW_MESSAGE),
            (status, _) => status.message(),
        }
    }

    /// Returns true if a winner exists and `coord` is one of its cells.
    #[instrument(skip(self))]
    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winner().is_some_and(|win| win.contains(coord))
    }

    /// Empty cells in row-major order, or none once the game is complete.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.is_complete() {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// Captures the state a presentation layer needs to render the game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board,
            turn: self.turn,
            moves_played: self.moves_played,
            status: self.status(),
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of an engine at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The board.
    board: Board,
    /// Player to move.
    turn: Player,
    /// Moves applied since the last reset.
    moves_played: usize,
    /// Derived status at capture time.
    status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn play_all(engine: &mut BoardEngine, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert_eq!(engine.apply_move(at(row, col)), MoveOutcome::Applied);
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = BoardEngine::new();
        assert_eq!(engine.current_turn(), Player::X);
        assert_eq!(engine.moves_played(), 0);
        assert!(Coord::ALL.iter().all(|c| engine.cell_at(*c) == Cell::Empty));
        assert!(!engine.is_complete());
    }

    #[test]
    fn test_apply_move_places_and_flips() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.apply_move(at(0, 0)), MoveOutcome::Applied);
        assert_eq!(engine.cell_at(at(0, 0)), Cell::X);
        assert_eq!(engine.current_turn(), Player::O);

        assert_eq!(engine.apply_move(at(2, 1)), MoveOutcome::Applied);
        assert_eq!(engine.cell_at(at(2, 1)), Cell::O);
        assert_eq!(engine.current_turn(), Player::X);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = BoardEngine::new();
        engine.apply_move(at(1, 1));
        let before = engine.clone();

        assert_eq!(engine.apply_move(at(1, 1)), MoveOutcome::RejectedOccupied);
        assert_eq!(engine, before);
        assert_eq!(engine.cell_at(at(1, 1)), Cell::X);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut engine = BoardEngine::new();
        play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = engine.clone();

        assert_eq!(engine.apply_move(at(2, 0)), MoveOutcome::RejectedGameOver);
        // Game over is reported even for an occupied target.
        assert_eq!(engine.apply_move(at(1, 1)), MoveOutcome::RejectedGameOver);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_play_validates_range() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.play(0, 2), Ok(MoveOutcome::Applied));
        assert_eq!(
            engine.play(3, 0),
            Err(CoordError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(engine.moves_played(), 1);
    }

    #[test]
    fn test_completion_message_lenient_mid_game() {
        let mut engine = BoardEngine::new();
        engine.apply_move(at(0, 0));
        assert_eq!(engine.completion_message(), Some("Draw!"));
    }

    #[test]
    fn test_completion_message_strict_mid_game() {
        let config = EngineConfig::new(CompletionPolicy::Strict, true);
        let mut engine = BoardEngine::with_config(config);
        engine.apply_move(at(0, 0));
        assert_eq!(engine.completion_message(), None);

        play_all(&mut engine, &[(1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(engine.completion_message(), Some("X Wins!"));
    }

    #[test]
    fn test_valid_moves() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.valid_moves().len(), 9);

        engine.apply_move(at(0, 0));
        engine.apply_move(at(1, 1));
        let valid = engine.valid_moves();
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&at(0, 0)));
        assert!(!valid.contains(&at(1, 1)));

        play_all(&mut engine, &[(0, 1), (2, 2), (0, 2)]);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = EngineConfig::new(CompletionPolicy::Strict, false);
        let mut engine = BoardEngine::with_config(config.clone());
        engine.apply_move(at(0, 0));
        engine.reset();
        assert_eq!(engine, BoardEngine::with_config(config));
    }

    #[test]
    fn test_snapshot() {
        let mut engine = BoardEngine::new();
        engine.apply_move(at(1, 1));
        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.turn(), Player::O);
        assert_eq!(*snapshot.moves_played(), 1);
        assert_eq!(*snapshot.status(), GameStatus::InProgress);
        assert_eq!(snapshot.board().get(at(1, 1)), Cell::X);
    }
}
