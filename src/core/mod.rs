//! Core game types: markers, moves, board state, outcomes, RNG, errors.
//!
//! Everything the search strategies need to know about tic-tac-toe lives
//! here. The searches only talk to [`GameState`] through its public methods.

pub mod action;
pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, CELL_COUNT};
pub use error::GameError;
pub use outcome::Outcome;
pub use player::Marker;
pub use rng::SearchRng;
pub use state::{GameState, MoveList, LINES};
