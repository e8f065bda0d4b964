//! Seedable randomness used by maze generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Source of the random decisions taken while building a maze.
///
/// Two sources constructed from the same seed must answer the same sequence
/// of calls identically; the generator relies on this for reproducible mazes.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;

    /// Permute `items` uniformly at random, in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Seed that reproduces this source, if it has one.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// [RandomSource] backed by [StdRng], remembering the seed it started from.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    random: StdRng,
}

impl SeededRandom {
    /// Seed from `seed`, or draw a fresh seed from the thread RNG.
    ///
    /// The drawn seed is kept so that an unseeded run can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        Self {
            seed,
            random: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.random.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.random);
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}
