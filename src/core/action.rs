//! Move representation.
//!
//! A move is the index of the cell the player to move marks, numbered
//! row-major from the top-left corner:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A move: the cell index to mark.
///
/// Construction never fails so that callers can describe out-of-range moves;
/// [`GameState::apply_move`](super::GameState::apply_move) rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move targeting the given cell.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Create a move from a row and column, both 0-based.
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        Self(row * 3 + col)
    }

    /// Cell index as `usize`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the index addresses a cell on the board.
    #[inline]
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.index() < CELL_COUNT
    }

    /// Iterate over every on-board move in ascending cell order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT as u8).map(Move)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
