//! Deterministic random source for rollouts.
//!
//! Searches never touch a global RNG. Each MCTS search owns a `SearchRng`
//! seeded from its configuration (or injected by the caller), and forks a
//! fresh stream per rollout so that the sequence consumed by one playout does
//! not shift the next.
//!
//! ```
//! use tictactoe_search::core::SearchRng;
//!
//! let mut rng = SearchRng::new(42);
//! let mut rollout_rng = rng.fork();
//!
//! // Forks are deterministic: the same parent seed yields the same branches.
//! let mut again = SearchRng::new(42).fork();
//! assert_eq!(rollout_rng.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable, forkable ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SearchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(self.seed.wrapping_add(self.fork_counter.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform integer in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
