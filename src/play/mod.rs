//! Self-play between move selectors.
//!
//! ## Overview
//!
//! - **SelfPlayConfig**: starting marker and the budget each side receives
//! - **play_game**: one selector moves for both sides
//! - **play_match**: two selectors, one per side
//! - **GameRecord**: moves, outcome and total nodes visited
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_search::core::Outcome;
//! use tictactoe_search::minimax::PrunedSearch;
//! use tictactoe_search::play::{play_game, SelfPlayConfig};
//!
//! let mut search = PrunedSearch::new();
//! let record = play_game(&mut search, &SelfPlayConfig::default()).unwrap();
//!
//! // Perfect play always draws.
//! assert_eq!(record.outcome, Outcome::Draw);
//! ```

pub mod self_play;

// Re-export main types
pub use self_play::{play_game, play_match, GameRecord, SelfPlayConfig};
