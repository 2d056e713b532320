//! Derived turn invariant: cursor parity agrees with the snapshot's marks.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: Turn owner is derived, never stored.
///
/// The snapshot under the cursor contains exactly `current` marks, so
/// cursor parity and mark-count parity name the same next player.
pub struct DerivedTurnInvariant;

impl Invariant<Game> for DerivedTurnInvariant {
    fn holds(game: &Game) -> bool {
        let Some(board) = game.history().get(game.current()) else {
            return false;
        };

        let by_count = if board.occupied() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        board.occupied() == game.current() && by_count == game.to_move()
    }

    fn description() -> &'static str {
        "Cursor position, mark count, and derived turn owner agree"
    }
}
