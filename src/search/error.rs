//! Errors raised by move selection.

use thiserror::Error;

use crate::core::GameError;

/// Errors that can occur during a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Move selection was asked for on a finished game.
    #[error("no legal move: the position is terminal")]
    NoLegalMove,

    /// A board operation failed during the search.
    #[error(transparent)]
    Game(#[from] GameError),
}
