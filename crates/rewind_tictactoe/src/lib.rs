//! Tic-tac-toe with a navigable move timeline.
//!
//! The crate is the deterministic core of the game: board snapshots,
//! win/draw rules, and a history state machine supporting time travel.
//! Presentation (rendering, sound cues, celebration effects) lives
//! behind the [`FeedbackSink`] observer and is supplied by the caller.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Cell, Game, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(Cell::Center)?;
//! assert_eq!(game.to_move(), Player::O);
//!
//! // Rewind to the start; the next move discards the abandoned branch.
//! game.jump_to(0)?;
//! game.apply_move(Cell::TopLeft)?;
//! assert_eq!(game.history_len(), 2);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cell;
mod controller;
mod events;
mod game;
mod types;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - cells and board types
pub use cell::Cell;
pub use types::{Board, GameStatus, Player, Square, WinLine};

// Crate-level exports - state machine
pub use game::{Game, MoveError};

// Crate-level exports - controller and feedback
pub use controller::Controller;
pub use events::{FeedbackSink, GameEvent, NullSink, Outcome};
