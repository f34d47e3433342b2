//! # Verification Report
//!
//! Structured output of the property verifier. Hard violations make the
//! report invalid; crossover warnings never do.

use serde::{Deserialize, Serialize};

/// A broken hard invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation<U> {
    /// A listed user has no entry in the assignment.
    MissingUser {
        /// The user
        user: U,
    },
    /// A user's sequence repeats objects.
    DuplicateObjects {
        /// The user
        user: U,
        /// Repeated entries
        duplicates: usize,
    },
    /// A user's object count is more than one away from the target.
    CountOutOfRange {
        /// The user
        user: U,
        /// Objects held
        actual: usize,
        /// Target count
        expected: usize,
    },
    /// Two users share nothing. This is a correctness defect.
    NoCrossover {
        /// Earlier user in input order
        first: U,
        /// Later user in input order
        second: U,
    },
}

/// Realized crossover fraction too far from the target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossoverWarning<U> {
    /// The user
    pub user: U,
    /// Fraction of the user's objects held by at least one other user.
    pub realized: f64,
    /// Requested crossover percentage.
    pub target: f64,
}

/// Per-user findings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserReport<U> {
    /// The user
    pub user: U,
    /// Objects held.
    pub object_count: usize,
    /// Repeated entries.
    pub duplicates: usize,
    /// Distinct objects also held by some other user.
    pub shared_objects: usize,
    /// `shared_objects / distinct objects`, zero for an empty sequence.
    pub crossover_ratio: f64,
}

/// Per-pair findings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport<U> {
    /// Earlier user in input order
    pub first: U,
    /// Later user in input order
    pub second: U,
    /// Distinct objects held by both.
    pub shared: usize,
}

/// Full verifier output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport<U> {
    /// Target objects per user.
    pub expected_per_user: usize,
    /// Requested crossover percentage.
    pub target_crossover: f64,
    /// Tolerance applied to the crossover check.
    pub tolerance: f64,
    /// One entry per user, input order.
    pub users: Vec<UserReport<U>>,
    /// One entry per unordered pair, seeding order.
    pub pairs: Vec<PairReport<U>>,
    /// Hard invariant failures.
    pub violations: Vec<Violation<U>>,
    /// Soft crossover findings.
    pub warnings: Vec<CrossoverWarning<U>>,
}

impl<U> VerificationReport<U> {
    /// Whether every hard invariant holds.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any crossover warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Pairs that share nothing.
    pub fn disjoint_pairs(&self) -> impl Iterator<Item = &PairReport<U>> {
        self.pairs.iter().filter(|pair| pair.shared == 0)
    }
}
