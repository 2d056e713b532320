//! Feedback cues derived from game events.

use rewind_tictactoe::{FeedbackSink, GameEvent, Outcome};

/// A presentation cue fired by the game core.
///
/// One per kind of audible feedback: a mark placed, a win, a draw, and
/// a click on a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// The game was won.
    Win,
    /// The game ended in a draw.
    Draw,
    /// A navigation control was used.
    Click,
}

/// Sink buffering cues for the UI loop to drain each frame.
#[derive(Debug, Default)]
pub struct CueSink {
    pending: Vec<Cue>,
}

impl CueSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all buffered cues, oldest first.
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}

impl FeedbackSink for CueSink {
    fn on_event(&mut self, event: &GameEvent) {
        let cue = match event {
            GameEvent::MoveApplied { .. } => Cue::Move,
            GameEvent::GameEnded {
                outcome: Outcome::Draw,
            } => Cue::Draw,
            GameEvent::GameEnded { .. } => Cue::Win,
            GameEvent::Navigated { .. } => Cue::Click,
        };
        self.pending.push(cue);
    }
}
