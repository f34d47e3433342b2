//! Inbound Ports (Driving Ports / API)

use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::{Assignment, AssignmentError, VerificationReport};

/// Primary assignment API.
pub trait AssignmentApi {
    /// Distribute `objects` among `users`.
    ///
    /// This is the main entry point. It:
    /// 1. Checks parameters and minimum supply
    /// 2. Allocates private quotas from a shuffled order
    /// 3. Seeds one shared object per user pair
    /// 4. Balances sharing toward the crossover target
    /// 5. Fills remaining gaps with unshared objects
    fn assign<U, O>(&self, users: &[U], objects: &[O]) -> Result<Assignment<U, O>, AssignmentError>
    where
        U: Clone + Eq + Hash + Debug,
        O: Clone + Eq + Hash + Debug;

    /// Independently re-check a finished assignment.
    ///
    /// Pure function of its inputs.
    fn verify<U, O>(
        &self,
        assignment: &Assignment<U, O>,
        users: &[U],
        num_objects: usize,
    ) -> VerificationReport<U>
    where
        U: Clone + PartialEq,
        O: Eq + Hash;
}
