//! Final result of a game.

use serde::{Deserialize, Serialize};

use super::player::Marker;
use super::state::GameState;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a triple.
    XWins,
    /// Board filled with no triple.
    Draw,
    /// O completed a triple.
    OWins,
}

impl Outcome {
    /// Outcome of a terminal state, `None` while the game continues.
    #[must_use]
    pub fn of(state: &GameState) -> Option<Self> {
        if !state.is_terminal() {
            return None;
        }
        Some(match state.winner() {
            Some(Marker::X) => Outcome::XWins,
            Some(Marker::O) => Outcome::OWins,
            None => Outcome::Draw,
        })
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, marker: Marker) -> bool {
        matches!(
            (self, marker),
            (Outcome::XWins, Marker::X) | (Outcome::OWins, Marker::O)
        )
    }

    /// Utility of this outcome from X's point of view.
    #[must_use]
    pub const fn utility(self) -> i32 {
        match self {
            Outcome::XWins => 1,
            Outcome::Draw => 0,
            Outcome::OWins => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::OWins => write!(f, "O wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_of() {
        assert_eq!(Outcome::of(&GameState::default()), None);

        let x_wins: GameState = "XXXOO....".parse().unwrap();
        assert_eq!(Outcome::of(&x_wins), Some(Outcome::XWins));

        let draw: GameState = "XOXXOOOXX".parse().unwrap();
        assert_eq!(Outcome::of(&draw), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_is_winner() {
        assert!(Outcome::XWins.is_winner(Marker::X));
        assert!(!Outcome::XWins.is_winner(Marker::O));
        assert!(Outcome::OWins.is_winner(Marker::O));
        assert!(!Outcome::Draw.is_winner(Marker::X));
        assert!(!Outcome::Draw.is_winner(Marker::O));
    }

    #[test]
    fn test_outcome_utility_matches_state() {
        let o_wins = GameState::from_board("OXXXO...O", Marker::X).unwrap();
        let outcome = Outcome::of(&o_wins).unwrap();

        assert_eq!(outcome, Outcome::OWins);
        assert_eq!(outcome.utility(), o_wins.utility());
    }
}
