//! Entropy sources for the opponent
//!
//! The engine never reaches for a global random source. It draws from an
//! `Entropy` value handed to it at construction:
//! - `SeededRng` for play (ChaCha8, reproducible from a `u64` seed)
//! - `Scripted` for tests and replays (yields a fixed move sequence)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use crate::moves::Move;

/// Source of uniformly distributed indices
pub trait Entropy {
    /// Next value in `[0, bound)`. `bound` is always non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Entropy for SeededRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of moves, cycling when exhausted
///
/// An empty script always yields index 0.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    indices: Vec<u32>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            indices: moves.into_iter().map(|m| m.index() as u32).collect(),
            cursor: 0,
        }
    }
}

impl Entropy for Scripted {
    fn next_below(&mut self, bound: u32) -> u32 {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        value % bound
    }
}
