//! Single-step invariant: adjacent snapshots differ by exactly one new mark.

use super::Invariant;
use crate::cell::Cell;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: Each snapshot extends its predecessor by one mark.
///
/// Exactly one cell changes between adjacent snapshots, that cell goes
/// from empty to occupied, and the mark belongs to the player whose turn
/// it was at the predecessor (X on even indices).
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        for (index, pair) in game.history().windows(2).enumerate() {
            let changed: Vec<Cell> = Cell::ALL
                .into_iter()
                .filter(|cell| pair[0].get(*cell) != pair[1].get(*cell))
                .collect();

            let [cell] = changed.as_slice() else {
                return false;
            };

            let expected = if index % 2 == 0 { Player::X } else { Player::O };
            if pair[0].get(*cell) != Square::Empty
                || pair[1].get(*cell) != Square::Occupied(expected)
            {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one empty cell gaining the derived mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleStepInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new();
        for cell in [Cell::TopLeft, Cell::Center, Cell::BottomRight] {
            game.apply_move(cell).expect("legal move");
        }

        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        let mut game = Game::new();
        game.apply_move(Cell::Center).expect("legal move");

        // Duplicate the latest snapshot: zero cells changed.
        let copy = game.board().clone();
        game.history.push(copy);

        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = Game::new();
        game.apply_move(Cell::Center).expect("legal move");

        // Successor that flips the existing mark instead of adding one.
        let mut corrupted = Board::new();
        corrupted.set(Cell::Center, Square::Occupied(Player::O));
        game.history.push(corrupted);

        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_parity_mark_violates() {
        let mut game = Game::new();

        // O placed on the first step, where X must move.
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Player::O));
        game.history.push(board);

        assert!(!SingleStepInvariant::holds(&game));
    }
}
