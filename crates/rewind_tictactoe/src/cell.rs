//! Named cells of the 3x3 board.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board (0-8, row-major).
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Converts the cell to its row-major board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Creates a cell from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Cell::TopLeft),
            1 => Some(Cell::TopCenter),
            2 => Some(Cell::TopRight),
            3 => Some(Cell::MiddleLeft),
            4 => Some(Cell::Center),
            5 => Some(Cell::MiddleRight),
            6 => Some(Cell::BottomLeft),
            7 => Some(Cell::BottomCenter),
            8 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Filters cells by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Cell> {
        <Cell as strum::IntoEnumIterator>::iter()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
