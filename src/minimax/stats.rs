//! Minimax search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax `select_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// Positions evaluated: internal, depth-cutoff and terminal, root included.
    pub nodes: u64,

    /// Sibling loops abandoned by an alpha or beta cutoff (always 0 without
    /// pruning).
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl MinimaxStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one evaluated position at `ply` below the root.
    #[inline]
    pub(crate) fn visit(&mut self, ply: u32) {
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
    }

    /// Calculate positions per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
