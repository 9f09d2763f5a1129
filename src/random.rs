//! Random draws used to simulate readings.
//!
//! Handlers never touch `rand` directly; they go through [`RandomSource`] so a
//! seeded generator can replace the thread-local one under test.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Capability for uniform integer draws.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[min, max]`. Returns `min` when the range is degenerate.
    fn int_inclusive(&self, min: i64, max: i64) -> i64;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0 or 1.
    fn index_below(&self, len: usize) -> usize;
}

/// Draws from the calling thread's generator on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_inclusive(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..=max)
    }

    fn index_below(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn int_inclusive(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.lock().random_range(min..=max)
    }

    fn index_below(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.lock().random_range(0..len)
    }
}

/// Pick the source matching an optional seed.
pub fn source_for_seed(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    }
}
