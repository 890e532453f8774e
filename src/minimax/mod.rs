//! Depth-bounded [Minimax] search, with and without [Alpha-Beta pruning].
//!
//! Both searches walk the game tree by mutating a single [`GameState`] with
//! `apply_move` / `undo_move` pairs in strict stack order, so the caller's
//! state is restored when `select_move` returns.
//!
//! ## Evaluation
//!
//! - Terminal positions score [`GameState::utility`].
//! - Non-terminal positions at the depth limit score [`GameState::heuristic`].
//! - Otherwise X maximizes and O minimizes over the children.
//!
//! The root is always expanded, so a depth of 0 behaves like a depth of 1: a
//! one-ply comparison of the children. Ties go to the first move in
//! [`GameState::legal_moves`] order.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
//!
//! [`GameState`]: crate::core::GameState
//! [`GameState::utility`]: crate::core::GameState::utility
//! [`GameState::heuristic`]: crate::core::GameState::heuristic
//! [`GameState::legal_moves`]: crate::core::GameState::legal_moves

pub mod exhaustive;
pub mod pruned;
pub mod stats;

pub use exhaustive::ExhaustiveSearch;
pub use pruned::PrunedSearch;
pub use stats::MinimaxStats;

use crate::core::Move;
use crate::search::{Depth, Value};

/// Bound larger than any utility or heuristic value.
pub const INFINITY: Value = Value::MAX;

/// Value of a subtree and the root move achieving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) value: Value,
    /// `None` at leaves.
    pub(crate) best_move: Option<Move>,
}

impl SearchResult {
    pub(crate) const fn leaf(value: Value) -> Self {
        Self {
            value,
            best_move: None,
        }
    }

    /// Worst possible result for the side to move.
    pub(crate) const fn worst(maximizing: bool) -> Self {
        Self::leaf(if maximizing { -INFINITY } else { INFINITY })
    }

    /// Whether `value` strictly improves on this result for the side to move.
    /// Strict comparison keeps the first of several equal moves.
    #[inline]
    pub(crate) const fn improved_by(&self, value: Value, maximizing: bool) -> bool {
        if maximizing {
            value > self.value
        } else {
            value < self.value
        }
    }
}

/// Depth handed to the root: at least one ply is always searched.
#[inline]
pub(crate) fn root_depth(max_depth: Depth) -> Depth {
    max_depth.max(1)
}
