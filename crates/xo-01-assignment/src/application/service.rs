//! Assignment Service
//!
//! Main service implementing [`AssignmentApi`], plus the free-standing
//! `assign` / `verify` entry points.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info, warn};

use crate::adapters::SeededShuffler;
use crate::algorithms::{
    allocate_unique, balance_crossover, check_feasibility, fill_gaps, seed_pairs,
    verify_assignment,
};
use crate::config::AssignmentConfig;
use crate::domain::{
    first_duplicate_position, invariant_is_permutation, AllocationState, Assignment,
    AssignmentError, IdentifierKind, VerificationReport, DEFAULT_CROSSOVER_TOLERANCE,
};
use crate::ports::{AssignmentApi, ObjectShuffler};

/// Assignment Service
///
/// Orchestrates the pipeline:
/// 1. Reject duplicate identifiers
/// 2. Feasibility check
/// 3. Unique allocation from the shuffled order
/// 4. Pairwise seeding
/// 5. Crossover balancing
/// 6. Gap fill
///
/// Every run owns its own pool, working state and generator; the service
/// keeps nothing between calls.
#[derive(Clone, Debug, Default)]
pub struct AssignmentService {
    config: AssignmentConfig,
}

impl AssignmentService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with custom config
    pub fn with_config(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Run the pipeline with a caller-supplied permutation source.
    pub fn assign_with_shuffler<U, O, S>(
        &self,
        users: &[U],
        objects: &[O],
        shuffler: &mut S,
    ) -> Result<Assignment<U, O>, AssignmentError>
    where
        U: Clone + Eq + Hash + Debug,
        O: Clone + Eq + Hash + Debug,
        S: ObjectShuffler + ?Sized,
    {
        run_pipeline(
            users,
            objects,
            self.config.assignment_percentage,
            self.config.crossover_percentage,
            shuffler,
        )
    }
}

impl AssignmentApi for AssignmentService {
    fn assign<U, O>(&self, users: &[U], objects: &[O]) -> Result<Assignment<U, O>, AssignmentError>
    where
        U: Clone + Eq + Hash + Debug,
        O: Clone + Eq + Hash + Debug,
    {
        let mut shuffler = SeededShuffler::new(self.config.seed);
        self.assign_with_shuffler(users, objects, &mut shuffler)
    }

    fn verify<U, O>(
        &self,
        assignment: &Assignment<U, O>,
        users: &[U],
        num_objects: usize,
    ) -> VerificationReport<U>
    where
        U: Clone + PartialEq,
        O: Eq + Hash,
    {
        verify_assignment(
            assignment,
            users,
            num_objects,
            self.config.assignment_percentage,
            self.config.crossover_percentage,
            self.config.crossover_tolerance,
        )
    }
}

/// Distribute `objects` among `users` with universal crossover.
///
/// `seed` makes the shuffle reproducible; two calls with identical inputs
/// and the same seed return identical assignments.
///
/// # Errors
///
/// `InvalidParameter` / `DuplicateIdentifier` for bad input, and
/// `InsufficientObjects` when the pool is too small.
pub fn assign<U, O>(
    users: &[U],
    objects: &[O],
    assignment_percentage: f64,
    crossover_percentage: f64,
    seed: Option<u64>,
) -> Result<Assignment<U, O>, AssignmentError>
where
    U: Clone + Eq + Hash + Debug,
    O: Clone + Eq + Hash + Debug,
{
    let mut shuffler = SeededShuffler::new(seed);
    run_pipeline(
        users,
        objects,
        assignment_percentage,
        crossover_percentage,
        &mut shuffler,
    )
}

/// Verify `assignment` with the default crossover tolerance.
pub fn verify<U, O>(
    assignment: &Assignment<U, O>,
    users: &[U],
    num_objects: usize,
    assignment_percentage: f64,
    crossover_percentage: f64,
) -> VerificationReport<U>
where
    U: Clone + PartialEq,
    O: Eq + Hash,
{
    verify_assignment(
        assignment,
        users,
        num_objects,
        assignment_percentage,
        crossover_percentage,
        DEFAULT_CROSSOVER_TOLERANCE,
    )
}

fn run_pipeline<U, O, S>(
    users: &[U],
    objects: &[O],
    assignment_percentage: f64,
    crossover_percentage: f64,
    shuffler: &mut S,
) -> Result<Assignment<U, O>, AssignmentError>
where
    U: Clone + Eq + Hash + Debug,
    O: Clone + Eq + Hash + Debug,
    S: ObjectShuffler + ?Sized,
{
    if let Some(position) = first_duplicate_position(users) {
        return Err(AssignmentError::duplicate(
            IdentifierKind::User,
            position,
            &users[position],
        ));
    }
    if let Some(position) = first_duplicate_position(objects) {
        return Err(AssignmentError::duplicate(
            IdentifierKind::Object,
            position,
            &objects[position],
        ));
    }

    let plan = check_feasibility(
        users.len(),
        objects.len(),
        assignment_percentage,
        crossover_percentage,
    )?;

    info!(
        users = plan.num_users,
        objects = plan.num_objects,
        per_user_total = plan.per_user_total,
        per_user_shared = plan.per_user_shared,
        per_user_unique = plan.per_user_unique,
        min_objects_needed = plan.min_objects_needed,
        "Assigning objects with universal crossover"
    );

    let order = shuffler.permutation(plan.num_objects);
    if !invariant_is_permutation(&order, plan.num_objects) {
        return Err(AssignmentError::invalid(
            "permutation",
            format!("{} positions for {} objects", order.len(), plan.num_objects),
            "shuffler must return each object position exactly once",
        ));
    }
    let mut state = AllocationState::new(plan.num_users);

    let (unique, mut pool) = allocate_unique(&plan, &order, &mut state);
    debug!(
        assigned = unique.assigned,
        pool_remaining = pool.len(),
        "Unique quotas allocated"
    );
    if !unique.short_users.is_empty() {
        warn!(
            short_users = unique.short_users.len(),
            "Pool exhausted during unique allocation"
        );
    }

    let seeding = seed_pairs(&mut state, &mut pool);
    debug!(
        seeded = seeding.seeded,
        pool_remaining = pool.len(),
        "User pairs seeded"
    );
    if !seeding.is_complete() {
        warn!(
            unseeded_pairs = seeding.unseeded.len(),
            "Pool exhausted before every pair was seeded"
        );
    }

    let balance = balance_crossover(&plan, &mut state, &mut pool);
    debug!(
        shared_added = balance.shared_added,
        unmet_users = balance.unmet_users.len(),
        pool_remaining = pool.len(),
        "Crossover balanced"
    );

    let gaps = fill_gaps(&plan, &mut state, &mut pool);
    debug!(
        filled = gaps.filled,
        pool_remaining = pool.len(),
        "Gaps filled"
    );
    if !gaps.short_users.is_empty() {
        warn!(
            short_users = gaps.short_users.len(),
            "Some users remain below their object quota"
        );
    }

    let assignment = state.into_assignment(users, objects);

    info!(
        rows = assignment.total_assigned(),
        unused_objects = pool.len(),
        "Assignment complete"
    );

    Ok(assignment)
}
