//! Property-based tests for the rules and the timeline state machine.
//!
//! These tests use proptest to verify properties hold across many
//! randomly generated boards and move sequences.

use proptest::prelude::*;
use rewind_tictactoe::rules::{check_winner, is_full, status};
use rewind_tictactoe::{Board, Cell, Game, GameStatus, Player, Square};

prop_compose! {
    fn arbitrary_square()(variant in 0..3u8) -> Square {
        match variant {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

prop_compose! {
    /// Any 9-square board, legal position or not. Rules functions are
    /// total over out-of-band boards.
    fn arbitrary_board()(squares in prop::collection::vec(arbitrary_square(), 9)) -> Board {
        let mut board = Board::new();
        for (i, square) in squares.into_iter().enumerate() {
            board.set(Cell::from_index(i).unwrap(), square);
        }
        board
    }
}

fn relabeled(board: &Board) -> Board {
    let mut swapped = Board::new();
    for cell in Cell::ALL {
        let square = match board.get(cell) {
            Square::Empty => Square::Empty,
            Square::Occupied(player) => Square::Occupied(player.opponent()),
        };
        swapped.set(cell, square);
    }
    swapped
}

/// Applies a stream of cell indices, skipping rejected ones.
fn play_loose(indices: &[usize]) -> Game {
    let mut game = Game::new();
    for &i in indices {
        if let Some(cell) = Cell::from_index(i) {
            let _ = game.apply_move(cell);
        }
    }
    game
}

proptest! {
    #[test]
    fn win_check_symmetric_under_relabeling(board in arbitrary_board()) {
        let direct = check_winner(&board);
        let swapped = check_winner(&relabeled(&board));

        match (direct, swapped) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.line(), b.line());
                prop_assert_eq!(a.player(), b.player().opponent());
            }
            (a, b) => prop_assert!(false, "asymmetric result: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn status_never_winner_and_draw_at_once(board in arbitrary_board()) {
        match status(&board) {
            GameStatus::Won(win) => {
                prop_assert_eq!(check_winner(&board), Some(win));
            }
            GameStatus::Draw => {
                prop_assert!(is_full(&board));
                prop_assert_eq!(check_winner(&board), None);
            }
            GameStatus::InProgress(_) => {
                prop_assert!(!is_full(&board));
                prop_assert_eq!(check_winner(&board), None);
            }
        }
    }

    #[test]
    fn snapshots_grow_by_exactly_one_mark(
        indices in prop::collection::vec(0..9usize, 0..30)
    ) {
        let game = play_loose(&indices);

        for pair in game.history().windows(2) {
            let changed: Vec<Cell> = Cell::ALL
                .into_iter()
                .filter(|cell| pair[0].get(*cell) != pair[1].get(*cell))
                .collect();

            prop_assert_eq!(changed.len(), 1);
            let cell = changed[0];
            prop_assert_eq!(pair[0].get(cell), Square::Empty);
            prop_assert!(matches!(pair[1].get(cell), Square::Occupied(_)));
        }
    }

    #[test]
    fn rewind_and_move_truncates_redo(
        indices in prop::collection::vec(0..9usize, 1..9),
        jump_back in 0..5usize,
    ) {
        let mut game = play_loose(&indices);
        let target = game.history_len().saturating_sub(1 + jump_back);
        game.jump_to(target).expect("target is within the timeline");

        // Apply the first cell still open at the target snapshot, if any.
        if let Some(cell) = game.valid_moves().first().copied()
            && !game.status().is_terminal()
        {
            game.apply_move(cell).expect("open cell on a live snapshot");
            prop_assert_eq!(game.history_len(), target + 2);
            prop_assert_eq!(game.current(), target + 1);
        }
    }

    #[test]
    fn reset_always_restores_initial_state(
        indices in prop::collection::vec(0..9usize, 0..12)
    ) {
        let mut game = play_loose(&indices);
        game.reset();

        prop_assert_eq!(&game, &Game::new());
        prop_assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }
}
