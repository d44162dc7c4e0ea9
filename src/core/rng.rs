//! Deterministic random number generation for play resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence of plays
//! - **Forkable**: Create independent branches for "what if" replays
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!
//! Resolution only ever needs one operation from its random source, a
//! uniform integer in an inclusive range. That operation is the
//! [`RollSource`] trait, so tests can substitute a scripted source.
//!
//! ```
//! use rust_gridiron::core::{GameRng, RollSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_inclusive(-2, 6);
//! assert!((-2..=6).contains(&roll));
//!
//! // Same seed, same rolls
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_inclusive(-2, 6), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of uniform integer rolls.
///
/// Both endpoints are inclusive. Implementations must tolerate `min == max`.
pub trait RollSource {
    /// Draw one integer uniformly from `min..=max`.
    fn roll_inclusive(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_inclusive(&mut self, min: i32, max: i32) -> i32 {
        (**self).roll_inclusive(min, max)
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// Supports forking and context-based independent streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same RNG state.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RollSource for GameRng {
    fn roll_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.inner.gen_range(lo..=hi)
    }
}

/// Serializable RNG state for checkpointing a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
