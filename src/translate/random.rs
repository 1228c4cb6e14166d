// Random sources used to choose between glyphs and to sample the fallback
// Injected into the translator so tests can pin exact outputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices
pub trait RandomSource: Send {
    /// Return an index in `0..len`; `len` is always at least 1
    fn index(&mut self, len: usize) -> usize;
}

/// Thread-local generator, the production default
///
/// The generator handle is fetched on every call since `ThreadRng` cannot
/// move between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Seeded generator for reproducible hosts and tests
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}

#[cfg(test)]
#[path = "random_test.rs"]
mod tests;
