//! Win detection logic for tic-tac-toe.

use crate::cell::Cell;
use crate::types::{Board, Square, WinLine};
use tracing::instrument;

/// The 8 possible winning triples, in fixed evaluation order.
///
/// The order is part of the contract: when more than one triple is
/// complete on an out-of-band board, `check_winner` reports the first
/// one listed here.
pub const WIN_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a completed line on the board.
///
/// Returns the winning player together with the cells forming the line,
/// or `None` if no triple is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinLine::new(player, line));
            }
        }
    }

    None
}
