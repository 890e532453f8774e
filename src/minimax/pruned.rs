//! Minimax with alpha-beta pruning.
//!
//! The window `(alpha, beta)` starts at `(-INFINITY, INFINITY)` at the root
//! and narrows as siblings are evaluated. Once `alpha >= beta` the remaining
//! siblings cannot change the parent's choice and are skipped. The value
//! and move returned at the root are identical to
//! [`ExhaustiveSearch`](super::ExhaustiveSearch) for the same depth, with the
//! same first-move tie-break.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameError, GameState, Move};
use crate::search::{Depth, MoveSelector, SearchError, Value};

use super::stats::MinimaxStats;
use super::{root_depth, SearchResult, INFINITY};

/// Alpha-beta pruned minimax search.
#[derive(Clone, Debug, Default)]
pub struct PrunedSearch {
    stats: MinimaxStats,
}

impl PrunedSearch {
    /// Create a new search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    /// Minimax value of `state` and the move achieving it, searching
    /// `max_depth` plies.
    pub fn evaluate(
        &mut self,
        state: &mut GameState,
        max_depth: Depth,
    ) -> Result<(Value, Move), SearchError> {
        let start = Instant::now();
        self.stats.reset();

        if state.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }

        let root = *state;
        let result = self.alpha_beta(state, root_depth(max_depth), 0, -INFINITY, INFINITY)?;
        debug_assert_eq!(*state, root, "apply/undo pairs must restore the root");
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let best_move = result.best_move.ok_or(SearchError::NoLegalMove)?;
        debug!(
            strategy = self.name(),
            depth = max_depth,
            best_move = best_move.0,
            value = result.value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta search complete"
        );
        Ok((result.value, best_move))
    }

    fn alpha_beta(
        &mut self,
        state: &mut GameState,
        depth: Depth,
        ply: u32,
        mut alpha: Value,
        mut beta: Value,
    ) -> Result<SearchResult, GameError> {
        self.stats.visit(ply);

        if state.is_terminal() {
            return Ok(SearchResult::leaf(state.utility()));
        }
        if depth == 0 {
            return Ok(SearchResult::leaf(state.heuristic()));
        }

        let maximizing = state.to_move().is_maximizing();
        let mut best = SearchResult::worst(maximizing);
        let moves = state.legal_moves();

        for (i, &mv) in moves.iter().enumerate() {
            state.apply_move(mv)?;
            let child = self.alpha_beta(state, depth - 1, ply + 1, alpha, beta);
            state.undo_move(mv)?;

            let value = child?.value;
            if best.improved_by(value, maximizing) {
                best = SearchResult {
                    value,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                alpha = alpha.max(best.value);
            } else {
                beta = beta.min(best.value);
            }

            if alpha >= beta {
                let skipped = moves.len() - i - 1;
                if skipped > 0 {
                    self.stats.cutoffs += 1;
                    trace!(ply, alpha, beta, skipped, "cutoff");
                }
                break;
            }
        }

        Ok(best)
    }
}

impl MoveSelector for PrunedSearch {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn select_move(&mut self, state: &mut GameState, budget: u32) -> Result<Move, SearchError> {
        self.evaluate(state, budget).map(|(_, mv)| mv)
    }

    fn nodes_visited(&self) -> u64 {
        self.stats.nodes
    }
}
