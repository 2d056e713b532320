//! Application state and logic.

use crate::feedback::{Cue, CueSink};
use rewind_tictactoe::{Controller, Game, GameStatus};
use std::io::Write;
use tracing::debug;

/// How many frames the win celebration stays on screen.
const CELEBRATION_TICKS: u8 = 30;

/// Main application state.
pub struct App {
    controller: Controller<CueSink>,
    status_message: String,
    bell: bool,
    celebration_ticks: u8,
}

impl App {
    /// Creates a new application.
    pub fn new(bell: bool) -> Self {
        Self {
            controller: Controller::new(CueSink::new()),
            status_message: "Next player: X. Press 1-9 to place a mark.".to_string(),
            bell,
            celebration_ticks: 0,
        }
    }

    /// The current game state.
    pub fn game(&self) -> &Game {
        self.controller.game()
    }

    /// The current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while the win celebration is showing.
    pub fn celebrating(&self) -> bool {
        self.celebration_ticks > 0
    }

    /// Places the current player's mark at the given board index (0-8).
    pub fn select_cell(&mut self, index: usize) {
        debug!(index, "cell selected");
        self.controller.select_cell(index);
        self.after_action();
    }

    /// Steps the cursor one snapshot back in the timeline.
    pub fn step_back(&mut self) {
        let current = self.game().current();
        if current > 0 {
            self.controller.select_history(current - 1);
        }
        self.after_action();
    }

    /// Steps the cursor one snapshot forward in the timeline.
    pub fn step_forward(&mut self) {
        let current = self.game().current();
        self.controller.select_history(current + 1);
        self.after_action();
    }

    /// Jumps to the empty board at the start of the timeline.
    pub fn jump_start(&mut self) {
        self.controller.select_history(0);
        self.after_action();
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.controller.reset();
        self.after_action();
    }

    /// Advances frame-based effects. Call once per draw loop tick.
    pub fn tick(&mut self) {
        self.celebration_ticks = self.celebration_ticks.saturating_sub(1);
    }

    fn after_action(&mut self) {
        for cue in self.controller.sink_mut().drain() {
            if cue == Cue::Win {
                self.celebration_ticks = CELEBRATION_TICKS;
            }
            self.ring_bell();
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let game = self.controller.game();
        self.status_message = match game.status() {
            GameStatus::InProgress(player) => format!("Next player: {:?}", player),
            GameStatus::Won(win) => {
                format!("Winner: {:?}", win.player())
            }
            GameStatus::Draw => "Draw! Game over".to_string(),
        };

        if game.current() + 1 < game.history_len() {
            self.status_message
                .push_str(&format!(" (viewing move #{})", game.current()));
        }
    }

    /// Best-effort audible cue; playback failure is ignored.
    fn ring_bell(&self) {
        if self.bell {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_tracks_game() {
        let mut app = App::new(false);

        app.select_cell(4);
        assert_eq!(app.status_message(), "Next player: O");

        app.restart();
        assert_eq!(app.status_message(), "Next player: X");
    }

    #[test]
    fn test_celebration_starts_on_win_and_decays() {
        let mut app = App::new(false);
        for index in [0, 1, 3, 4, 6] {
            app.select_cell(index);
        }

        assert!(app.celebrating());
        assert_eq!(app.status_message(), "Winner: X");

        for _ in 0..CELEBRATION_TICKS {
            app.tick();
        }
        assert!(!app.celebrating());
    }

    #[test]
    fn test_viewing_older_snapshot_is_flagged() {
        let mut app = App::new(false);
        app.select_cell(4);
        app.select_cell(0);
        app.step_back();

        assert_eq!(app.status_message(), "Next player: O (viewing move #1)");
    }
}
