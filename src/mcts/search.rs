//! Core MCTS search algorithm.
//!
//! Each iteration runs four phases:
//! 1. Selection: descend with the selection policy while the current node is
//!    fully expanded and has children.
//! 2. Expansion: if the node still has untried moves, pop the last one and
//!    add the resulting child.
//! 3. Simulation: play the node's position out with the rollout policy.
//! 4. Backpropagation: credit the result to every node up to the root,
//!    flipping its sign each ply.
//!
//! The move returned is the root child with the most visits.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameError, GameState, Move, SearchRng};
use crate::search::{MoveSelector, SearchError};

use super::config::MctsConfig;
use super::policy::{RandomRollout, RolloutPolicy, SelectionPolicy, Ucb1};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Upper bound on nodes reserved up front for one search.
const MAX_PREALLOCATED: u32 = 1 << 16;

/// Main MCTS search context.
///
/// Owns the configuration, the random source and the tree of the most recent
/// search. A new tree is built for every call to [`search`](Self::search).
pub struct MonteCarloSearch {
    /// Search configuration.
    config: MctsConfig,

    /// Tree of the last search.
    tree: SearchTree,

    /// RNG for rollouts.
    rng: SearchRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Rollout policy.
    rollout: Box<dyn RolloutPolicy>,

    /// Search statistics.
    stats: SearchStats,
}

impl MonteCarloSearch {
    /// Create a new MCTS search context seeded from `config.seed`.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        let rng = SearchRng::new(config.seed);

        Self {
            config,
            tree: SearchTree::new(GameState::default()),
            rng,
            selection: Box::new(Ucb1),
            rollout: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: SearchRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom rollout policy.
    #[must_use]
    pub fn with_rollout<R: RolloutPolicy + 'static>(mut self, rollout: R) -> Self {
        self.rollout = Box::new(rollout);
        self
    }

    /// Run MCTS for `iterations` iterations and return the most visited move.
    ///
    /// At least one iteration is always run so that the root has a child.
    pub fn search(&mut self, state: &GameState, iterations: u32) -> Result<Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        if state.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }

        let capacity = iterations.min(MAX_PREALLOCATED) as usize + 1;
        self.tree = SearchTree::with_capacity(*state, capacity);

        for _ in 0..iterations.max(1) {
            self.iteration()?;
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let root = self.tree.root();
        let best = self
            .tree
            .most_visited_child(root)
            .and_then(|child| self.tree.get(child).mv)
            .ok_or(SearchError::NoLegalMove)?;

        debug!(
            strategy = self.name(),
            iterations = self.stats.iterations,
            best_move = best.0,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            "mcts search complete"
        );
        Ok(best)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self) -> Result<(), GameError> {
        // === SELECTION ===
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if !node.is_fully_expanded() || node.children.is_empty() {
                break;
            }
            current = self.selection.select(&self.tree, current, &self.config);
        }

        // === EXPANSION ===
        if let Some(child) = self.tree.expand(current)? {
            current = child;
            self.stats.nodes_expanded += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.tree.get(child).depth);
        }

        // === SIMULATION ===
        let leaf = self.tree.get(current);
        let mut rollout_rng = self.rng.fork();
        let utility = self.rollout.rollout(leaf.state, &mut rollout_rng)?;
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        let reward = leaf.mover().map_or(0, |mover| mover.sign() * utility);
        self.tree.backpropagate(current, f64::from(reward));

        trace!(node = current.0, utility, reward, "mcts iteration complete");
        Ok(())
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the tree of the last search.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// `(move, visits)` for every root child of the last search.
    #[must_use]
    pub fn root_visits(&self) -> Vec<(Move, u32)> {
        self.tree.root_visits()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl MoveSelector for MonteCarloSearch {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn select_move(&mut self, state: &mut GameState, budget: u32) -> Result<Move, SearchError> {
        self.search(state, budget)
    }

    fn nodes_visited(&self) -> u64 {
        self.tree.len() as u64
    }
}
