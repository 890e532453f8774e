//! Errors raised by board operations.
//!
//! All of these report a broken caller contract. They are surfaced to the
//! caller instead of being absorbed so that a harness can report them.

use thiserror::Error;

/// Errors from [`GameState`](super::GameState) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `apply_move` targeted an occupied or off-board cell.
    #[error("invalid move: cell {index} is occupied or off the board")]
    InvalidMove {
        /// Cell index that was requested.
        index: u8,
    },

    /// `undo_move` was called out of stack order.
    #[error("invalid state: cannot undo cell {index}: {reason}")]
    InvalidState {
        /// Cell index that was requested.
        index: u8,
        /// What was wrong with the cell.
        reason: &'static str,
    },

    /// A board literal does not describe a reachable position.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
