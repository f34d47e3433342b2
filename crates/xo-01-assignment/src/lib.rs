//! # XO-01: Assignment Core
//!
//! Distributes a pool of objects among users under two constraints at once:
//! each user receives a target number of objects, and every pair of users
//! shares at least one of them (universal crossover). The fraction of each
//! user's objects that overlap with others is steered toward a target.
//!
//! ## Architecture
//!
//! - **Domain**: `Assignment`, `CrossoverMatrix`, `ObjectPool`, `FeasibilityPlan`, verification report
//! - **Algorithms**: feasibility, unique allocation, pairwise seeding, crossover balancing, gap fill, verification
//! - **Ports**: Inbound (`AssignmentApi`) and Outbound (`ObjectShuffler`, `IdentifierSource`, `AssignmentSink`)
//! - **Adapters**: seeded and input-order shufflers, in-memory source/sink
//! - **Application**: `AssignmentService` and the `assign` / `verify` entry points
//!
//! ## Pipeline
//!
//! ```text
//! check_feasibility ─→ allocate_unique ─→ seed_pairs ─→ balance_crossover ─→ fill_gaps
//!                                                                               │
//!                                                          verify_assignment ←──┘
//! ```
//!
//! Pool exhaustion inside the pipeline never fails the call. It shows up as
//! violations in the verifier report.
//!
//! ## Example
//!
//! ```
//! use xo_01_assignment::{assign, verify};
//!
//! let users = vec!["A", "B"];
//! let objects: Vec<u32> = (1..=10).collect();
//!
//! let assignment = assign(&users, &objects, 0.6, 0.5, Some(7)).unwrap();
//! let report = verify(&assignment, &users, objects.len(), 0.6, 0.5);
//!
//! assert!(report.is_valid());
//! assert_eq!(assignment.objects_for(&"A").unwrap().len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemorySink, InMemorySource, InputOrderShuffler, SeededShuffler};
pub use algorithms::{
    allocate_unique, balance_crossover, check_feasibility, fill_gaps, seed_pairs,
    verify_assignment,
};
pub use application::{assign, verify, AssignmentService};
pub use config::AssignmentConfig;
pub use domain::{
    Assignment, AssignmentError, CrossoverMatrix, CrossoverWarning, FeasibilityPlan,
    IdentifierKind, PairReport, PortError, UserPair, UserReport, VerificationReport, Violation,
    DEFAULT_CROSSOVER_TOLERANCE, MAX_COUNT_DEVIATION,
};
pub use ports::{AssignmentApi, AssignmentSink, IdentifierSource, ObjectShuffler};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
