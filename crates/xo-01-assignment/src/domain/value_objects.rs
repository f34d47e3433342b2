//! # Domain Value Objects
//!
//! Immutable value types produced by the feasibility check and by each
//! allocation phase.

use serde::{Deserialize, Serialize};

/// Quotas and minimum supply derived from the caller's parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityPlan {
    /// Number of users.
    pub num_users: usize,
    /// Number of objects supplied.
    pub num_objects: usize,
    /// Target object count per user.
    pub per_user_total: usize,
    /// Portion of the per-user target meant to be shared.
    pub per_user_shared: usize,
    /// Portion of the per-user target that is private.
    pub per_user_unique: usize,
    /// Objects consumed by private quotas.
    pub min_unique_objects: usize,
    /// One object per unordered user pair.
    pub min_pair_objects: usize,
    /// `min_unique_objects + min_pair_objects`.
    pub min_objects_needed: usize,
}

impl FeasibilityPlan {
    /// Most shared objects the balancer gives any single other user.
    ///
    /// Zero when there is only one user.
    pub fn pair_cap(&self) -> usize {
        match self.num_users {
            0 | 1 => 0,
            n => self.per_user_shared / (n - 1),
        }
    }

    /// Objects left over once the minimum supply is reserved.
    pub fn slack(&self) -> usize {
        self.num_objects.saturating_sub(self.min_objects_needed)
    }
}

/// An unordered pair of user positions, stored with `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserPair {
    /// Lower user position.
    pub first: usize,
    /// Higher user position.
    pub second: usize,
}

impl UserPair {
    /// Create a pair; the positions may be given in either order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Result of the unique-allocation phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniqueAllocation {
    /// Objects handed out as private quota.
    pub assigned: usize,
    /// Users whose private quota could not be met.
    pub short_users: Vec<usize>,
}

/// Result of the pairwise-seeding phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedingOutcome {
    /// Pairs that received a shared object.
    pub seeded: usize,
    /// Pairs left without one because the pool ran dry.
    pub unseeded: Vec<UserPair>,
}

impl SeedingOutcome {
    /// Whether every pair received a shared object.
    pub fn is_complete(&self) -> bool {
        self.unseeded.is_empty()
    }
}

/// Result of the crossover-balancing phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceOutcome {
    /// Extra shared objects placed.
    pub shared_added: usize,
    /// Users still short of their shared quota afterwards.
    pub unmet_users: Vec<usize>,
    /// Whether the pool emptied during balancing.
    pub pool_exhausted: bool,
}

/// Result of the gap-fill phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GapFillOutcome {
    /// Unshared objects appended.
    pub filled: usize,
    /// Users still short of their total quota afterwards.
    pub short_users: Vec<usize>,
}
