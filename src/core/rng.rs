//! Injectable randomness for dice and prompt draws.
//!
//! ## Key Features
//!
//! - **Injectable**: the orchestrator only sees the `RandomSource` trait
//! - **Deterministic**: same seed produces identical games
//! - **Forkable**: independent per-game streams for batch simulation
//! - **Scripted**: `ScriptedRng` replays fixed dice and picks in tests
//!
//! ```
//! use heart_ladder::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_die(6);
//! assert!((1..=6).contains(&face));
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(6), face);
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the orchestrator and simulation.
pub trait RandomSource {
    /// Roll one die, returning a face in `1..=sides`.
    fn roll_die(&mut self, sides: u8) -> u8;

    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Seed this RNG was created from.
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
    /// Keeps dice rolls and mission outcomes from perturbing each other.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len.max(1))
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays scripted values. Used to pin down exact games in tests.
///
/// Once a script runs dry it falls back to the lowest value: face 1,
/// index 0, outcome `true`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    dice: VecDeque<u8>,
    picks: VecDeque<usize>,
    outcomes: VecDeque<bool>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue die faces, consumed one per die.
    #[must_use]
    pub fn with_dice(mut self, faces: &[u8]) -> Self {
        self.dice.extend(faces.iter().copied());
        self
    }

    /// Queue pick indices, reduced modulo the pool length.
    #[must_use]
    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks.extend(picks.iter().copied());
        self
    }

    /// Queue chance outcomes.
    #[must_use]
    pub fn with_outcomes(mut self, outcomes: &[bool]) -> Self {
        self.outcomes.extend(outcomes.iter().copied());
        self
    }

    /// Dice faces not yet consumed.
    #[must_use]
    pub fn remaining_dice(&self) -> usize {
        self.dice.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self, sides: u8) -> u8 {
        self.dice.pop_front().unwrap_or(1).clamp(1, sides.max(1))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(true)
    }
}
