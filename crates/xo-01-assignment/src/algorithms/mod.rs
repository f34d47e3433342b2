//! # Algorithms Module
//!
//! The assignment pipeline, one stage per file. Data flows strictly
//! forward: feasibility, unique allocation, pairwise seeding, crossover
//! balancing, gap fill. The verifier runs on the finished result.

pub mod crossover_balancer;
pub mod feasibility;
pub mod gap_filler;
pub mod pairwise_seeder;
pub mod unique_allocator;
pub mod verifier;

pub use crossover_balancer::balance_crossover;
pub use feasibility::check_feasibility;
pub use gap_filler::fill_gaps;
pub use pairwise_seeder::seed_pairs;
pub use unique_allocator::allocate_unique;
pub use verifier::verify_assignment;
