//! Self-play loop.
//!
//! Plays one game from an empty board, asking a [`MoveSelector`] for every
//! move, and records what happened.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, Marker, Move, Outcome, CELL_COUNT};
use crate::search::{MoveSelector, SearchError};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Marker that moves first.
    pub starting: Marker,

    /// Budget handed to `select_move` when X is to move.
    pub x_budget: u32,

    /// Budget handed to `select_move` when O is to move.
    pub o_budget: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            starting: Marker::X,
            x_budget: 9,
            o_budget: 9,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker that moves first.
    #[must_use]
    pub fn with_starting(mut self, starting: Marker) -> Self {
        self.starting = starting;
        self
    }

    /// Use the same budget for both sides.
    #[must_use]
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.x_budget = budget;
        self.o_budget = budget;
        self
    }

    /// Set X's budget.
    #[must_use]
    pub fn with_x_budget(mut self, budget: u32) -> Self {
        self.x_budget = budget;
        self
    }

    /// Set O's budget.
    #[must_use]
    pub fn with_o_budget(mut self, budget: u32) -> Self {
        self.o_budget = budget;
        self
    }

    /// Budget for `marker`.
    #[must_use]
    pub fn budget_for(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x_budget,
            Marker::O => self.o_budget,
        }
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,

    /// Final result.
    pub outcome: Outcome,

    /// Sum of `nodes_visited` over every move selection.
    pub nodes: u64,

    /// Board at the end of the game.
    pub final_state: GameState,
}

impl GameRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Play one game with `selector` choosing the moves of both sides.
pub fn play_game<S>(selector: &mut S, config: &SelfPlayConfig) -> Result<GameRecord, SearchError>
where
    S: MoveSelector + ?Sized,
{
    let name = selector.name();
    run(config, name, |state, _, budget| {
        let mv = selector.select_move(state, budget)?;
        Ok((mv, selector.nodes_visited()))
    })
}

/// Play one game with `x` moving for X and `o` moving for O.
pub fn play_match(
    x: &mut dyn MoveSelector,
    o: &mut dyn MoveSelector,
    config: &SelfPlayConfig,
) -> Result<GameRecord, SearchError> {
    run(config, "match", |state, marker, budget| {
        let selector: &mut dyn MoveSelector = match marker {
            Marker::X => &mut *x,
            Marker::O => &mut *o,
        };
        let mv = selector.select_move(state, budget)?;
        Ok((mv, selector.nodes_visited()))
    })
}

/// Drive a game to the end. `select` returns the chosen move and the nodes
/// the selector visited choosing it.
fn run<F>(config: &SelfPlayConfig, label: &str, mut select: F) -> Result<GameRecord, SearchError>
where
    F: FnMut(&mut GameState, Marker, u32) -> Result<(Move, u64), SearchError>,
{
    let mut state = GameState::new(config.starting);
    let mut moves = Vec::with_capacity(CELL_COUNT);
    let mut nodes = 0u64;

    let outcome = loop {
        if let Some(outcome) = Outcome::of(&state) {
            break outcome;
        }

        let marker = state.to_move();
        let (mv, visited) = select(&mut state, marker, config.budget_for(marker))?;
        state.apply_move(mv)?;

        moves.push(mv);
        nodes += visited;
    };

    debug!(
        selector = label,
        %outcome,
        moves = moves.len(),
        nodes,
        "self-play game finished"
    );

    Ok(GameRecord {
        moves,
        outcome,
        nodes,
        final_state: state,
    })
}
