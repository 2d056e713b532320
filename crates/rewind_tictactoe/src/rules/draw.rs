//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::cell::Cell;
    use crate::types::{Player, Square};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Cell::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full with no complete line
        let mut board = Board::new();
        let marks = [
            (Cell::TopLeft, Player::X),
            (Cell::TopCenter, Player::O),
            (Cell::TopRight, Player::X),
            (Cell::MiddleLeft, Player::O),
            (Cell::Center, Player::X),
            (Cell::MiddleRight, Player::X),
            (Cell::BottomLeft, Player::O),
            (Cell::BottomCenter, Player::X),
            (Cell::BottomRight, Player::O),
        ];
        for (cell, player) in marks {
            board.set(cell, Square::Occupied(player));
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Player::X));
        board.set(Cell::TopCenter, Square::Occupied(Player::X));
        board.set(Cell::TopRight, Square::Occupied(Player::X));
        board.set(Cell::MiddleLeft, Square::Occupied(Player::O));
        board.set(Cell::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
