//! Snapshot-history state machine for tic-tac-toe.
//!
//! The game owns an ordered sequence of board snapshots and a cursor
//! into it. Applying a move after rewinding discards the abandoned
//! branch before appending, so the timeline always describes a single
//! line of play. Turn owner and status are derived, never stored.

use crate::cell::Cell;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};

/// Error that can occur when applying a move or navigating the timeline.
///
/// Controllers surface these as silent no-ops; the library reports them
/// so callers can tell a rejection from an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the cell is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Cell),

    /// The current snapshot is terminal (won or drawn).
    #[display("Game is already over")]
    GameOver,

    /// The requested history index does not exist.
    #[display("History index {} is out of range", _0)]
    OutOfRange(usize),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game with a navigable move timeline.
///
/// The state is a pure function of `(history, current)`: the snapshot
/// under the cursor decides whose turn it is and whether the game is
/// over. Serializes to a plain snapshot list plus cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, oldest first. Index 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Cursor into `history` selecting the displayed snapshot.
    pub(crate) current: usize,
}

impl Game {
    /// Creates a new game with an empty board at the start of the timeline.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// The board snapshot under the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// The cursor position in the timeline.
    pub fn current(&self) -> usize {
        self.current
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots in the timeline.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The player who moves next from the current snapshot.
    ///
    /// X moves on even cursor positions, O on odd ones.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Cells still open at the current snapshot.
    pub fn valid_moves(&self) -> Vec<Cell> {
        Cell::valid_moves(self.board())
    }

    /// Places the current player's mark at the given cell.
    ///
    /// Snapshots after the cursor are discarded before the successor is
    /// appended, so a move made after rewinding starts a fresh branch
    /// and the abandoned one is unrecoverable. Terminal evaluation is
    /// synchronous: the returned status already reflects the new board.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the current snapshot is terminal,
    /// or `MoveError::SquareOccupied` if the cell is taken.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn apply_move(&mut self, cell: Cell) -> Result<GameStatus, MoveError> {
        if rules::check_winner(self.board()).is_some() || rules::is_full(self.board()) {
            return Err(MoveError::GameOver);
        }

        if !self.board().is_empty(cell) {
            return Err(MoveError::SquareOccupied(cell));
        }

        let mut next = self.board().clone();
        next.set(cell, Square::Occupied(self.to_move()));

        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        self.debug_check();

        Ok(self.status())
    }

    /// Moves the cursor to the given snapshot. History is untouched.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if the index has no snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::OutOfRange(index));
        }

        self.current = index;
        Ok(())
    }

    /// Discards the timeline and starts over from an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![Board::new()];
        self.current = 0;
        self.debug_check();
    }

    /// Panics in debug builds when a mutation broke a timeline invariant.
    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            panic!("timeline invariant violated: {}", descriptions.join("; "));
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
