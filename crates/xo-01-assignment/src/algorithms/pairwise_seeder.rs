//! # Pairwise Seeder
//!
//! Gives every unordered user pair one shared object so that universal
//! crossover holds before any balancing happens.
//!
//! Pair order is stable and input-order based: outer loop over users in
//! input order, inner loop over the users after it. Under scarcity the
//! pairs at the end of that order are the ones left unseeded, so the order
//! is part of the behavior contract.

use crate::domain::{AllocationState, ObjectPool, SeedingOutcome};

/// Seed one shared object per pair from the front of the pool.
///
/// Pairs reached after the pool empties are reported as unseeded.
pub fn seed_pairs(state: &mut AllocationState, pool: &mut ObjectPool) -> SeedingOutcome {
    let mut outcome = SeedingOutcome::default();
    let pairs: Vec<_> = state.crossover.pairs().collect();

    for pair in pairs {
        match pool.pop_front() {
            Some(obj) => {
                state.share(pair.first, pair.second, obj);
                outcome.seeded += 1;
            }
            None => outcome.unseeded.push(pair),
        }
    }

    outcome
}
