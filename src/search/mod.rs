//! Shared move-selection interface.
//!
//! Every strategy in this crate implements [`MoveSelector`], so a driver can
//! swap plain minimax, alpha-beta and MCTS without changing its loop. The
//! meaning of the budget argument is strategy specific: search depth in plies
//! for the minimax family, rollout count for MCTS.

pub mod error;
pub mod selector;

pub use error::SearchError;
pub use selector::MoveSelector;

/// Search depth in plies.
pub type Depth = u32;

/// Minimax value, scored from X's point of view.
pub type Value = i32;
