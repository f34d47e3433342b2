//! # Assignment Properties
//!
//! Randomized checks over small populations. Percentages are drawn as
//! whole percents so the feasibility arithmetic below mirrors the gate
//! exactly.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashSet;
    use xo_01_assignment::{assign, verify, AssignmentError, Violation};

    fn ids(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    /// Per-user total, per-user shared, and minimum objects needed.
    fn sizing(users: usize, objects: usize, a_pct: u32, c_pct: u32) -> (usize, usize, usize) {
        let a = a_pct as f64 / 100.0;
        let c = c_pct as f64 / 100.0;
        let total = (objects as f64 * a).floor() as usize;
        let shared = (total as f64 * c).floor() as usize;
        let needed = users * (total - shared) + users * (users - 1) / 2;
        (total, shared, needed)
    }

    proptest! {
        #[test]
        fn test_rejects_exactly_when_objects_short(
            users in 1usize..=6,
            objects in 1usize..=80,
            a_pct in 1u32..=100,
            c_pct in 0u32..=100,
            seed in any::<u64>(),
        ) {
            let (_, _, needed) = sizing(users, objects, a_pct, c_pct);
            let result = assign(
                &ids("u", users),
                &ids("o", objects),
                a_pct as f64 / 100.0,
                c_pct as f64 / 100.0,
                Some(seed),
            );

            if objects < needed {
                prop_assert_eq!(
                    result.unwrap_err(),
                    AssignmentError::InsufficientObjects { required: needed, available: objects }
                );
            } else {
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn test_feasible_runs_hold_hard_invariants(
            users in 1usize..=6,
            objects in 1usize..=80,
            a_pct in 1u32..=100,
            c_pct in 0u32..=100,
            seed in any::<u64>(),
        ) {
            let (total, shared, needed) = sizing(users, objects, a_pct, c_pct);
            prop_assume!(objects >= needed);

            let user_ids = ids("u", users);
            let a = a_pct as f64 / 100.0;
            let c = c_pct as f64 / 100.0;
            let assignment = assign(&user_ids, &ids("o", objects), a, c, Some(seed)).unwrap();
            let report = verify(&assignment, &user_ids, objects, a, c);

            for user in &user_ids {
                let seq = assignment.objects_for(user).unwrap();
                let distinct: HashSet<_> = seq.iter().collect();
                prop_assert_eq!(distinct.len(), seq.len());
            }
            prop_assert_eq!(report.disjoint_pairs().count(), 0);
            let hard_violation = report.violations.iter().any(|v| {
                matches!(v, Violation::NoCrossover { .. } | Violation::DuplicateObjects { .. })
            });
            prop_assert!(!hard_violation, "hard violation: {:?}", report.violations);

            // Counts are only pinned when sharing quotas cover every partner
            // and there is room for every user's full quota.
            if shared + 1 >= users && objects >= users * total {
                for user in &user_ids {
                    let len = assignment.objects_for(user).unwrap().len();
                    prop_assert!(len.abs_diff(total) <= 1, "{} has {} of {}", user, len, total);
                }
                prop_assert!(report.is_valid());
            }
        }

        #[test]
        fn test_seeded_runs_repeat(
            users in 1usize..=6,
            objects in 20usize..=80,
            seed in any::<u64>(),
        ) {
            prop_assume!(objects >= sizing(users, objects, 20, 50).2);
            let user_ids = ids("u", users);
            let object_ids = ids("o", objects);

            let first = assign(&user_ids, &object_ids, 0.2, 0.5, Some(seed)).unwrap();
            let second = assign(&user_ids, &object_ids, 0.2, 0.5, Some(seed)).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
