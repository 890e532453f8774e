//! Move selector trait.

use crate::core::{GameState, Move};

use super::error::SearchError;

/// A strategy that picks a move for the side to move.
///
/// ## Implementation Notes
///
/// - `select_move` returns [`SearchError::NoLegalMove`] on terminal states.
/// - Implementations may mutate `state` while searching but must hand it back
///   exactly as they received it, on success and on error.
/// - `nodes_visited` reports the work done by the most recent
///   `select_move` call.
pub trait MoveSelector {
    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// Choose a move for `state.to_move()`.
    ///
    /// `budget` is the search depth in plies for minimax strategies and the
    /// number of iterations for Monte Carlo strategies.
    fn select_move(&mut self, state: &mut GameState, budget: u32) -> Result<Move, SearchError>;

    /// Positions (or tree nodes) visited by the last `select_move` call.
    fn nodes_visited(&self) -> u64;
}
