//! Status derivation for board snapshots.

use super::{check_winner, is_full};
use crate::types::{Board, GameStatus, Player};
use tracing::instrument;

/// Derives the status of a board snapshot.
///
/// A snapshot is `Won` if it contains a completed line, `Draw` if it is
/// full without one, and `InProgress` otherwise. The next player is
/// derived from mark-count parity: X moves when the count is even.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = check_winner(board) {
        return GameStatus::Won(win);
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    let next = if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    };
    GameStatus::InProgress(next)
}
