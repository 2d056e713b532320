//! Controller bridging user actions, the state machine, and feedback.

use crate::cell::Cell;
use crate::events::{FeedbackSink, GameEvent, Outcome};
use crate::game::Game;
use crate::types::GameStatus;
use tracing::{debug, instrument};

/// Owns a [`Game`] and a feedback sink, exposing the three user actions.
///
/// Rejected actions (occupied square, finished game, bad index) are
/// deliberately silent: the state stays put, nothing is emitted, and the
/// rejection is only visible at debug log level. This matches how the
/// board ignores clicks on occupied squares.
#[derive(Debug)]
pub struct Controller<S> {
    game: Game,
    sink: S,
}

impl<S: FeedbackSink> Controller<S> {
    /// Creates a controller over a fresh game.
    pub fn new(sink: S) -> Self {
        Self {
            game: Game::new(),
            sink,
        }
    }

    /// The underlying game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The feedback sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the feedback sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Select a cell by board index (0-8) and place the current mark.
    ///
    /// Emits a move event, followed by a game-ended event when the move
    /// is terminal. Illegal selections are no-ops.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) {
        let Some(cell) = Cell::from_index(index) else {
            debug!(index, "ignoring out-of-range cell index");
            return;
        };

        let player = self.game.to_move();
        match self.game.apply_move(cell) {
            Ok(status) => {
                self.sink.on_event(&GameEvent::MoveApplied { cell, player });
                match status {
                    GameStatus::Won(win) => self.sink.on_event(&GameEvent::GameEnded {
                        outcome: Outcome::Winner(win),
                    }),
                    GameStatus::Draw => self.sink.on_event(&GameEvent::GameEnded {
                        outcome: Outcome::Draw,
                    }),
                    GameStatus::InProgress(_) => {}
                }
            }
            Err(err) => debug!(%err, "ignoring illegal move"),
        }
    }

    /// Select a history entry to display.
    ///
    /// Emits a navigation event; out-of-range indices are no-ops.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.sink.on_event(&GameEvent::Navigated { index }),
            Err(err) => debug!(%err, "ignoring out-of-range navigation"),
        }
    }

    /// Restart from an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.sink.on_event(&GameEvent::Navigated { index: 0 });
    }
}
