//! Feedback events published to the presentation layer.
//!
//! Sound, animation, and any other cosmetic reaction live behind the
//! [`FeedbackSink`] trait: the controller publishes events, the sink
//! reacts. Sinks are fire-and-forget from the state machine's point of
//! view; whatever they do must never fail back into game logic.

use crate::cell::Cell;
use crate::types::{Player, WinLine};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(WinLine),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(win) => Some(win.player()),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(win) => write!(f, "Player {:?} wins", win.player()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Events the controller emits for presentation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveApplied {
        /// Where the mark was placed.
        cell: Cell,
        /// Who placed it.
        player: Player,
    },
    /// The move just applied ended the game.
    GameEnded {
        /// Win or draw.
        outcome: Outcome,
    },
    /// The cursor moved to another snapshot (jump or reset).
    Navigated {
        /// The snapshot now displayed.
        index: usize,
    },
}

/// Observer for presentation feedback.
///
/// Implementations react to events with sounds, highlights, or nothing
/// at all. They are called synchronously after the state change and must
/// swallow their own failures.
pub trait FeedbackSink {
    /// Reacts to a single event.
    fn on_event(&mut self, event: &GameEvent);
}

/// Sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}
