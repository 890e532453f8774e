//! Plain minimax: every child of every expanded position is evaluated.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameError, GameState, Move};
use crate::search::{Depth, MoveSelector, SearchError, Value};

use super::stats::MinimaxStats;
use super::{root_depth, SearchResult};

/// Minimax search without pruning.
///
/// ```
/// use tictactoe_search::core::{GameState, Move};
/// use tictactoe_search::minimax::ExhaustiveSearch;
///
/// // X to move can complete the top row.
/// let mut state: GameState = "XX.OO....".parse().unwrap();
/// let mut search = ExhaustiveSearch::new();
///
/// let (value, best) = search.evaluate(&mut state, 9).unwrap();
/// assert_eq!(best, Move::new(2));
/// assert_eq!(value, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSearch {
    stats: MinimaxStats,
}

impl ExhaustiveSearch {
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
        let result = self.minimax(state, root_depth(max_depth), 0)?;
        debug_assert_eq!(*state, root, "apply/undo pairs must restore the root");
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let best_move = result.best_move.ok_or(SearchError::NoLegalMove)?;
        debug!(
            strategy = self.name(),
            depth = max_depth,
            best_move = best_move.0,
            value = result.value,
            nodes = self.stats.nodes,
            "minimax search complete"
        );
        Ok((result.value, best_move))
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        depth: Depth,
        ply: u32,
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

        for mv in state.legal_moves() {
            state.apply_move(mv)?;
            let child = self.minimax(state, depth - 1, ply + 1);
            state.undo_move(mv)?;

            let value = child?.value;
            if best.improved_by(value, maximizing) {
                best = SearchResult {
                    value,
                    best_move: Some(mv),
                };
            }
        }

        Ok(best)
    }
}

impl MoveSelector for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select_move(&mut self, state: &mut GameState, budget: u32) -> Result<Move, SearchError> {
        self.evaluate(state, budget).map(|(_, mv)| mv)
    }

    fn nodes_visited(&self) -> u64 {
        self.stats.nodes
    }
}
