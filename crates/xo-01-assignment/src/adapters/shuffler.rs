//! Shuffler adapters.
//!
//! `SeededShuffler` is the production permutation: a Fisher-Yates shuffle
//! driven by a `StdRng` the caller seeds. `InputOrderShuffler` keeps the
//! input order and is used to pin exact outputs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::ports::ObjectShuffler;

/// Random permutation from an explicitly owned generator.
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    /// Reproducible when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl ObjectShuffler for SeededShuffler {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Identity permutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputOrderShuffler;

impl ObjectShuffler for InputOrderShuffler {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}
