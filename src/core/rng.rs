//! Random integer source shared by both strategies of a run

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::DEFAULT_SEED;

/// Produces integers uniformly distributed over an inclusive range.
///
/// Callers must pass `min <= max`; `BenchConfig::validate` guarantees this
/// for values coming from a config.
pub trait IntSource {
    fn next_in(&mut self, min: i32, max: i32) -> i32;
}

/// Deterministic generator: the same seed yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededIntGenerator {
    rng: StdRng,
    seed: u64,
}

impl SeededIntGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededIntGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl IntSource for SeededIntGenerator {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

impl<S: IntSource + ?Sized> IntSource for &mut S {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_in(min, max)
    }
}
