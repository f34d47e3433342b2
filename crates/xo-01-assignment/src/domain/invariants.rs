//! # Domain Invariants
//!
//! Rules a finished assignment must satisfy. The verifier composes these;
//! they are also handy on their own in tests.

use std::collections::HashSet;
use std::hash::Hash;

/// Largest accepted difference between a user's object count and the target.
pub const MAX_COUNT_DEVIATION: usize = 1;

/// Default absolute tolerance on the realized crossover fraction.
pub const DEFAULT_CROSSOVER_TOLERANCE: f64 = 0.15;

/// Invariant: a user's sequence never repeats an object.
pub fn invariant_no_duplicates<O: Eq + Hash>(objects: &[O]) -> bool {
    duplicate_count(objects) == 0
}

/// Number of entries in `objects` that repeat an earlier entry.
pub fn duplicate_count<O: Eq + Hash>(objects: &[O]) -> usize {
    let mut seen = HashSet::with_capacity(objects.len());
    objects.iter().filter(|obj| !seen.insert(*obj)).count()
}

/// Position of the first entry that repeats an earlier one.
pub fn first_duplicate_position<T: Eq + Hash>(items: &[T]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().position(|item| !seen.insert(item))
}

/// Invariant: `order` lists every position in `0..len` exactly once.
pub fn invariant_is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    order
        .iter()
        .all(|&pos| pos < len && !std::mem::replace(&mut seen[pos], true))
}

/// Invariant: a user's object count is within one of the target.
///
/// Exact equality is not always reachable because of integer division.
pub fn invariant_count_within_tolerance(actual: usize, expected: usize) -> bool {
    actual.abs_diff(expected) <= MAX_COUNT_DEVIATION
}

/// Invariant (universal crossover): two users share at least one object.
pub fn invariant_pair_intersects<O: Eq + Hash>(a: &[O], b: &[O]) -> bool {
    let set: HashSet<&O> = a.iter().collect();
    b.iter().any(|obj| set.contains(obj))
}

/// Soft check: the realized shared fraction is close to the target.
pub fn crossover_within_tolerance(realized: f64, target: f64, tolerance: f64) -> bool {
    (realized - target).abs() <= tolerance
}
