//! # tictactoe-search
//!
//! Game-tree search strategies for 3x3 tic-tac-toe, built to be compared
//! head to head in self-play.
//!
//! ## Design Principles
//!
//! 1. **One Game, Many Searches**: every strategy works against the same
//!    [`GameState`] and implements the same [`MoveSelector`] trait.
//!
//! 2. **Caller's State Is Sacred**: searches may apply and undo moves on the
//!    state they are handed but always give it back unchanged.
//!
//! 3. **Deterministic**: MCTS randomness comes from an explicit, seeded
//!    [`SearchRng`]. Minimax breaks ties by legal-move order.
//!
//! ## Modules
//!
//! - `core`: markers, moves, board state, outcomes, RNG, errors
//! - `search`: the `MoveSelector` trait and search errors
//! - `minimax`: depth-bounded minimax, with and without alpha-beta pruning
//! - `mcts`: Monte Carlo Tree Search with UCB1 selection and random rollouts
//! - `play`: self-play drivers producing game records

pub mod core;
pub mod mcts;
pub mod minimax;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameError, GameState, Marker, Move, Outcome, SearchRng};

pub use crate::search::{Depth, MoveSelector, SearchError, Value};

pub use crate::minimax::{ExhaustiveSearch, MinimaxStats, PrunedSearch};

pub use crate::mcts::{MctsConfig, MonteCarloSearch, SearchStats};

pub use crate::play::{play_game, play_match, GameRecord, SelfPlayConfig};
