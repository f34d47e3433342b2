//! # Unique Allocator
//!
//! Hands each user its private quota from the shuffled object order.
//!
//! Users are served in input order. A single cursor walks the shuffled
//! order across all users, skipping claimed objects, so user `i` receives
//! the `i`-th run of unclaimed objects. Running out of objects is not an
//! error here; later phases and the verifier surface the shortfall.

use crate::domain::{AllocationState, FeasibilityPlan, ObjectPool, UniqueAllocation};

/// Allocate private quotas and return the pool of objects left for sharing.
///
/// `order` is a permutation of object positions `0..plan.num_objects`.
///
/// # Panics
///
/// If `order` holds a position `>= plan.num_objects`.
pub fn allocate_unique(
    plan: &FeasibilityPlan,
    order: &[usize],
    state: &mut AllocationState,
) -> (UniqueAllocation, ObjectPool) {
    let mut claimed = vec![false; plan.num_objects];
    let mut outcome = UniqueAllocation::default();
    let mut cursor = 0;

    for (user, slot) in state.slots.iter_mut().enumerate() {
        let mut taken = 0;
        while taken < plan.per_user_unique && cursor < order.len() {
            let obj = order[cursor];
            cursor += 1;
            if claimed[obj] {
                continue;
            }
            claimed[obj] = true;
            slot.push(obj);
            taken += 1;
        }

        outcome.assigned += taken;
        if taken < plan.per_user_unique {
            outcome.short_users.push(user);
        }
    }

    (outcome, ObjectPool::from_unclaimed(order, &claimed))
}
