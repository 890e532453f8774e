//! Player markers.
//!
//! Tic-tac-toe has exactly two sides. `Marker::X` is the maximizing player:
//! every utility and heuristic value in this crate is scored from X's point
//! of view. `Marker::O` is the minimizing player.

use serde::{Deserialize, Serialize};

/// One of the two markers that can occupy a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The maximizing side.
    X,
    /// The minimizing side.
    O,
}

impl Marker {
    /// Both markers, X first.
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Whether this side maximizes the minimax value.
    #[inline]
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Marker::X)
    }

    /// Sign applied to an X-relative score to express it from this side's
    /// point of view.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Marker::X => 1,
            Marker::O => -1,
        }
    }

    /// Board character for this marker.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Parse a board character, case-insensitive.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Marker::X),
            'O' => Some(Marker::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
