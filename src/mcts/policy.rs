//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `RolloutPolicy`: How to play a position out to the end (uniform random)

use crate::core::{GameError, GameState, SearchRng};

use super::config::MctsConfig;
use super::node::NodeId;
use super::tree::SearchTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select a child of `node`, which must have at least one child.
    fn select(&self, tree: &SearchTree, node: NodeId, config: &MctsConfig) -> NodeId;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high reward) with exploration (low visits).
/// Formula: `value / visits + c * sqrt(ln(parent_visits) / visits)`.
/// The first child with the maximal score wins ties.
#[derive(Clone, Debug, Default)]
pub struct Ucb1;

impl Ucb1 {
    /// UCB1 score of a child given its parent's visit count.
    #[must_use]
    pub fn score(value: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
        if visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(visits);
        let ln_parent = f64::from(parent_visits.max(1)).ln();
        value / visits + exploration * (ln_parent / visits).sqrt()
    }
}

impl SelectionPolicy for Ucb1 {
    fn select(&self, tree: &SearchTree, node: NodeId, config: &MctsConfig) -> NodeId {
        let parent = tree.get(node);
        let mut best = NodeId::NONE;
        let mut best_score = f64::NEG_INFINITY;

        for &child in &parent.children {
            let c = tree.get(child);
            let score = Self::score(c.value, c.visits, parent.visits, config.exploration_constant);
            if best.is_none() || score > best_score {
                best = child;
                best_score = score;
            }
        }

        best
    }
}

// =============================================================================
// Rollout Policy
// =============================================================================

/// Policy for playing a position out to a terminal state.
pub trait RolloutPolicy: Send + Sync {
    /// Play `state` to the end and return its [`GameState::utility`].
    fn rollout(&self, state: GameState, rng: &mut SearchRng) -> Result<i32, GameError>;
}

/// Random rollout policy.
///
/// Plays uniformly random legal moves until terminal. Always terminates: every
/// move fills one of at most nine empty cells.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl RolloutPolicy for RandomRollout {
    fn rollout(&self, mut state: GameState, rng: &mut SearchRng) -> Result<i32, GameError> {
        while !state.is_terminal() {
            let moves = state.legal_moves();
            let idx = rng.gen_range_usize(0..moves.len());
            state.apply_move(moves[idx])?;
        }
        Ok(state.utility())
    }
}
