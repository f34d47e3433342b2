//! # Property Verifier
//!
//! Re-checks a finished assignment independently of how it was built.
//!
//! Hard checks (make the report invalid):
//! - every listed user is present
//! - no user holds an object twice
//! - each user's count is within one of `floor(num_objects * assignment_percentage)`
//! - every pair of users shares at least one object
//!
//! Soft check (warning only): each user's realized shared fraction is within
//! `tolerance` of the crossover target.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::domain::{
    crossover_within_tolerance, duplicate_count, invariant_count_within_tolerance, Assignment,
    CrossoverWarning, PairReport, UserReport, VerificationReport, Violation,
};

/// Verify `assignment` against the parameters it was requested with.
///
/// Never mutates its input; identical inputs give identical reports.
pub fn verify_assignment<U, O>(
    assignment: &Assignment<U, O>,
    users: &[U],
    num_objects: usize,
    assignment_percentage: f64,
    crossover_percentage: f64,
    tolerance: f64,
) -> VerificationReport<U>
where
    U: Clone + PartialEq,
    O: Eq + Hash,
{
    let expected = (num_objects as f64 * assignment_percentage).floor() as usize;
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    let empty: &[O] = &[];
    let sequences: Vec<&[O]> = users
        .iter()
        .map(|user| {
            assignment.objects_for(user).unwrap_or_else(|| {
                violations.push(Violation::MissingUser { user: user.clone() });
                empty
            })
        })
        .collect();
    let sets: Vec<HashSet<&O>> = sequences.iter().map(|seq| seq.iter().collect()).collect();

    // How many users hold each object.
    let mut holders: HashMap<&O, usize> = HashMap::new();
    for set in &sets {
        for obj in set {
            *holders.entry(*obj).or_default() += 1;
        }
    }

    let mut user_reports = Vec::with_capacity(users.len());
    for ((user, seq), set) in users.iter().zip(&sequences).zip(&sets) {
        let duplicates = duplicate_count(seq);
        if duplicates > 0 {
            violations.push(Violation::DuplicateObjects {
                user: user.clone(),
                duplicates,
            });
        }
        if !invariant_count_within_tolerance(seq.len(), expected) {
            violations.push(Violation::CountOutOfRange {
                user: user.clone(),
                actual: seq.len(),
                expected,
            });
        }

        let shared_objects = set.iter().filter(|obj| holders[*obj] > 1).count();
        let crossover_ratio = if set.is_empty() {
            0.0
        } else {
            shared_objects as f64 / set.len() as f64
        };
        if !crossover_within_tolerance(crossover_ratio, crossover_percentage, tolerance) {
            warnings.push(CrossoverWarning {
                user: user.clone(),
                realized: crossover_ratio,
                target: crossover_percentage,
            });
        }

        user_reports.push(UserReport {
            user: user.clone(),
            object_count: seq.len(),
            duplicates,
            shared_objects,
            crossover_ratio,
        });
    }

    let mut pair_reports = Vec::new();
    for (i, first) in users.iter().enumerate() {
        for (j, second) in users.iter().enumerate().skip(i + 1) {
            let shared = sets[i].intersection(&sets[j]).count();
            if shared == 0 {
                violations.push(Violation::NoCrossover {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
            pair_reports.push(PairReport {
                first: first.clone(),
                second: second.clone(),
                shared,
            });
        }
    }

    VerificationReport {
        expected_per_user: expected,
        target_crossover: crossover_percentage,
        tolerance,
        users: user_reports,
        pairs: pair_reports,
        violations,
        warnings,
    }
}
