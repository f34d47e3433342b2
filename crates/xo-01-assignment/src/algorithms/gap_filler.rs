//! # Gap Filler
//!
//! Tops up users still short of `per_user_total` with unshared objects.
//!
//! Only the pool is drawn from, and the pool never holds an object that is
//! already assigned, so each fill goes to exactly one user. Fills are not
//! recorded in the crossover matrix.

use crate::domain::{AllocationState, FeasibilityPlan, GapFillOutcome, ObjectPool};

/// Append pool objects to short users, in input order.
pub fn fill_gaps(
    plan: &FeasibilityPlan,
    state: &mut AllocationState,
    pool: &mut ObjectPool,
) -> GapFillOutcome {
    let mut outcome = GapFillOutcome::default();

    for (user, slot) in state.slots.iter_mut().enumerate() {
        while slot.len() < plan.per_user_total {
            match pool.pop_front() {
                Some(obj) => {
                    slot.push(obj);
                    outcome.filled += 1;
                }
                None => break,
            }
        }

        if slot.len() < plan.per_user_total {
            outcome.short_users.push(user);
        }
    }

    outcome
}
