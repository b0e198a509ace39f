//! RNG oracle for deterministic random number generation.
//!
//! Every random draw of a session (strike variance, enemy choices, evasion and
//! sneak checks) goes through one [`RngOracle`] handed to the rules by the
//! caller.
//!
//! # Determinism
//!
//! Given the same seed, [`GameRng`] produces the same sequence of draws, so a
//! session driven by the same player inputs replays identically.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for game mechanics.
///
/// Implementations only provide the two primitive draws; the remaining helpers
/// are derived from them so scripted test generators stay small.
pub trait RngOracle {
    /// Uniform integer in `[min, max]` inclusive. Returns `min` when `min >= max`.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Uniform real in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty set");
        let last = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        self.range(0, last) as usize
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Seeded game random number generator.
///
/// Wraps `ChaCha8Rng` for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngOracle for GameRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
