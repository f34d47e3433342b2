//! # Crossover Balancer
//!
//! Tops up each user's shared objects toward `per_user_shared`, spreading
//! them across partners instead of piling them onto one.
//!
//! For each user in input order:
//! 1. `needed = per_user_shared - row_total(user)`; skip when not positive.
//! 2. Order the other users by how much they already share with this user,
//!    ascending, ties kept in input order (stable sort).
//! 3. Give each partner at most `pair_cap` new shared objects, and never
//!    more than the partner's remaining room under `per_user_total`.
//! 4. Stop once `needed` hits zero or the pool is empty.

use crate::domain::{AllocationState, BalanceOutcome, FeasibilityPlan, ObjectPool};

/// Distribute extra shared objects from the pool.
pub fn balance_crossover(
    plan: &FeasibilityPlan,
    state: &mut AllocationState,
    pool: &mut ObjectPool,
) -> BalanceOutcome {
    let mut outcome = BalanceOutcome::default();
    let cap = plan.pair_cap();

    for user in 0..plan.num_users {
        let current = state.crossover.row_total(user);
        let Some(mut needed) = plan.per_user_shared.checked_sub(current).filter(|&n| n > 0) else {
            continue;
        };

        let mut partners: Vec<usize> = (0..plan.num_users).filter(|&u| u != user).collect();
        partners.sort_by_key(|&other| state.crossover.get(user, other));

        for other in partners {
            if pool.is_empty() {
                outcome.pool_exhausted = true;
                break;
            }

            let room = plan.per_user_total.saturating_sub(state.count(other));
            let quota = needed.min(cap).min(room);
            for _ in 0..quota {
                let Some(obj) = pool.pop_front() else {
                    outcome.pool_exhausted = true;
                    break;
                };
                state.share(user, other, obj);
                outcome.shared_added += 1;
                needed -= 1;
            }

            if needed == 0 {
                break;
            }
        }

        if needed > 0 {
            outcome.unmet_users.push(user);
        }
    }

    outcome
}
