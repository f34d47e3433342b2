//! # Feasibility Checker
//!
//! Validates parameters and derives per-user quotas plus the minimum pool
//! size: every user's private quota, and one shared object per pair.
//!
//! Pure: no allocation state is touched.

use crate::domain::{AssignmentError, FeasibilityPlan};

/// Validate the parameters and compute the [`FeasibilityPlan`].
///
/// # Errors
///
/// - `InvalidParameter` when a count is zero or a percentage is out of
///   range (`assignment_percentage` in `(0, 1]`, `crossover_percentage` in
///   `[0, 1]`). NaN is rejected.
/// - `InsufficientObjects` when `num_objects < min_objects_needed`.
pub fn check_feasibility(
    num_users: usize,
    num_objects: usize,
    assignment_percentage: f64,
    crossover_percentage: f64,
) -> Result<FeasibilityPlan, AssignmentError> {
    if num_users == 0 {
        return Err(AssignmentError::invalid(
            "users",
            num_users,
            "user list cannot be empty",
        ));
    }
    if num_objects == 0 {
        return Err(AssignmentError::invalid(
            "objects",
            num_objects,
            "object list cannot be empty",
        ));
    }
    if !(assignment_percentage > 0.0 && assignment_percentage <= 1.0) {
        return Err(AssignmentError::invalid(
            "assignment_percentage",
            assignment_percentage,
            "must be in (0, 1]",
        ));
    }
    if !(0.0..=1.0).contains(&crossover_percentage) {
        return Err(AssignmentError::invalid(
            "crossover_percentage",
            crossover_percentage,
            "must be in [0, 1]",
        ));
    }

    let per_user_total = (num_objects as f64 * assignment_percentage).floor() as usize;
    let per_user_shared = (per_user_total as f64 * crossover_percentage).floor() as usize;
    let per_user_unique = per_user_total - per_user_shared;

    let min_unique_objects = num_users * per_user_unique;
    let min_pair_objects = num_users * (num_users - 1) / 2;
    let min_objects_needed = min_unique_objects + min_pair_objects;

    if num_objects < min_objects_needed {
        return Err(AssignmentError::InsufficientObjects {
            required: min_objects_needed,
            available: num_objects,
        });
    }

    Ok(FeasibilityPlan {
        num_users,
        num_objects,
        per_user_total,
        per_user_shared,
        per_user_unique,
        min_unique_objects,
        min_pair_objects,
        min_objects_needed,
    })
}
