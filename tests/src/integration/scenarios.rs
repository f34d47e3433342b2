//! # Assignment Scenarios
//!
//! Fixed-input scenarios for the full pipeline: feasibility boundaries,
//! the two-user happy path, pinned input-order output, and degradation
//! under scarcity.

#[cfg(test)]
mod tests {
    use xo_01_assignment::domain::AllocationState;
    use xo_01_assignment::{
        allocate_unique, assign, balance_crossover, check_feasibility, fill_gaps, seed_pairs,
        verify, AssignmentConfig, AssignmentError, AssignmentService, InputOrderShuffler,
        Violation,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn ids(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn input_order_service(
        assignment_percentage: f64,
        crossover_percentage: f64,
    ) -> AssignmentService {
        AssignmentService::with_config(AssignmentConfig {
            assignment_percentage,
            crossover_percentage,
            ..Default::default()
        })
    }

    // =============================================================================
    // FEASIBILITY
    // =============================================================================

    #[test]
    fn test_three_users_ten_objects_rejected() {
        let err = assign(&names(&["A", "B", "C"]), &ids("o", 10), 0.6, 0.5, Some(1)).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::InsufficientObjects {
                required: 12,
                available: 10
            }
        );
    }

    #[test]
    fn test_three_users_twenty_objects_rejected() {
        let err = assign(&names(&["A", "B", "C"]), &ids("o", 20), 0.5, 0.3, Some(1)).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::InsufficientObjects {
                required: 24,
                available: 20
            }
        );
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let none: Vec<String> = Vec::new();
        assert!(matches!(
            assign(&none, &ids("o", 5), 0.5, 0.5, None),
            Err(AssignmentError::InvalidParameter { .. })
        ));
        assert!(matches!(
            assign(&names(&["A"]), &none, 0.5, 0.5, None),
            Err(AssignmentError::InvalidParameter { .. })
        ));
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_two_users_ten_objects() {
        let users = names(&["A", "B"]);
        let objects = ids("o", 10);

        for seed in 0..20 {
            let assignment = assign(&users, &objects, 0.6, 0.5, Some(seed)).unwrap();

            let a = assignment.objects_for(&users[0]).unwrap();
            let b = assignment.objects_for(&users[1]).unwrap();
            assert_eq!(a.len(), 6);
            assert_eq!(b.len(), 6);
            assert!(a.iter().any(|obj| b.contains(obj)));

            let report = verify(&assignment, &users, objects.len(), 0.6, 0.5);
            assert!(report.is_valid(), "seed {seed}: {:?}", report.violations);
            assert!(!report.has_warnings());
        }
    }

    #[test]
    fn test_many_users_universal_crossover() {
        let users = ids("u", 12);
        let objects = ids("o", 600);

        let assignment = assign(&users, &objects, 0.05, 0.4, Some(99)).unwrap();
        let report = verify(&assignment, &users, objects.len(), 0.05, 0.4);

        assert!(report.is_valid(), "{:?}", report.violations);
        assert_eq!(report.pairs.len(), 66);
        assert_eq!(report.disjoint_pairs().count(), 0);
    }

    // =============================================================================
    // ORDERING CONTRACT
    // =============================================================================

    /// Input-order permutation pins every placement: unique runs, then the
    /// pair seeds (A,B) (A,C) (B,C), then A's top-up to B, then C's gap fill.
    #[test]
    fn test_pinned_output_for_fixed_input() {
        let users = names(&["A", "B", "C"]);
        let objects = ids("o", 20);

        let assignment = input_order_service(0.4, 0.5)
            .assign_with_shuffler(&users, &objects, &mut InputOrderShuffler)
            .unwrap();

        let rows: Vec<(String, String)> = assignment
            .rows()
            .map(|(u, o)| (u.clone(), o.clone()))
            .collect();
        let expected: Vec<(String, String)> = [
            ("A", "o1"), ("A", "o2"), ("A", "o3"), ("A", "o4"),
            ("A", "o13"), ("A", "o14"), ("A", "o16"), ("A", "o17"),
            ("B", "o5"), ("B", "o6"), ("B", "o7"), ("B", "o8"),
            ("B", "o13"), ("B", "o15"), ("B", "o16"), ("B", "o17"),
            ("C", "o9"), ("C", "o10"), ("C", "o11"), ("C", "o12"),
            ("C", "o14"), ("C", "o15"), ("C", "o18"), ("C", "o19"),
        ]
        .iter()
        .map(|(u, o)| (u.to_string(), o.to_string()))
        .collect();

        assert_eq!(rows, expected);
    }

    #[test]
    fn test_scarce_pool_leaves_last_pairs_unseeded() {
        // The plan is sized for 12 objects but only 10 reach the pipeline,
        // leaving one object for three pairs.
        let plan = check_feasibility(3, 12, 0.25, 0.0).unwrap();
        assert_eq!(plan.per_user_unique, 3);
        let order: Vec<usize> = (0..10).collect();
        let mut state = AllocationState::new(3);

        let (_, mut pool) = allocate_unique(&plan, &order, &mut state);
        let seeding = seed_pairs(&mut state, &mut pool);
        balance_crossover(&plan, &mut state, &mut pool);
        fill_gaps(&plan, &mut state, &mut pool);

        assert_eq!(seeding.seeded, 1);
        assert_eq!(seeding.unseeded.len(), 2);

        let users = names(&["A", "B", "C"]);
        let assignment = state.into_assignment(&users, &ids("o", 12));
        let report = verify(&assignment, &users, 12, 0.25, 0.0);

        assert!(!report.is_valid());
        assert_eq!(
            report
                .violations
                .iter()
                .filter(|v| matches!(v, Violation::NoCrossover { .. }))
                .count(),
            2
        );
        assert!(report.violations.contains(&Violation::NoCrossover {
            first: "A".to_string(),
            second: "C".to_string(),
        }));
    }

    // =============================================================================
    // DETERMINISM
    // =============================================================================

    #[test]
    fn test_same_seed_bit_identical() {
        let users = ids("u", 7);
        let objects = ids("o", 300);

        let first = assign(&users, &objects, 0.1, 0.3, Some(42)).unwrap();
        let second = assign(&users, &objects, 0.1, 0.3, Some(42)).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.rows().collect::<Vec<_>>(),
            second.rows().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_verify_twice_identical() {
        let users = ids("u", 5);
        let objects = ids("o", 100);
        let assignment = assign(&users, &objects, 0.1, 0.5, Some(8)).unwrap();

        let first = verify(&assignment, &users, objects.len(), 0.1, 0.5);
        let second = verify(&assignment, &users, objects.len(), 0.1, 0.5);

        assert_eq!(first, second);
    }
}
