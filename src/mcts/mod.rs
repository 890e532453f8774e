//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! Builds a tree over the positions reachable from the root, choosing where
//! to descend with UCB1 and estimating leaves with uniformly random playouts.
//! Key features:
//!
//! - **Arena tree**: nodes live in a flat `Vec` and refer to each other by
//!   [`NodeId`], so parent links cost nothing to keep.
//! - **Alternating perspective**: every node stores reward from the point of
//!   view of the player who moved into it, negated at each ply on the way up.
//! - **Deterministic**: all randomness flows from a seeded [`SearchRng`](crate::core::SearchRng).
//! - **Configurable Policies**: selection and rollout are trait objects.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_search::core::{GameState, Move};
//! use tictactoe_search::mcts::{MctsConfig, MonteCarloSearch};
//!
//! let state: GameState = "XX.OO....".parse().unwrap();
//! let mut search = MonteCarloSearch::new(MctsConfig::default());
//!
//! let best = search.search(&state, 1000).unwrap();
//! assert_eq!(best, Move::new(2));
//!
//! for (mv, visits) in search.root_visits() {
//!     println!("{mv}: {visits} visits");
//! }
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! use tictactoe_search::mcts::{MctsConfig, MonteCarloSearch};
//!
//! let search = MonteCarloSearch::new(MctsConfig::default())
//!     .with_selection(MySelection)
//!     .with_rollout(MyRollout);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, NodePhase, SearchNode};
pub use policy::{RandomRollout, RolloutPolicy, SelectionPolicy, Ucb1};
pub use search::MonteCarloSearch;
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
