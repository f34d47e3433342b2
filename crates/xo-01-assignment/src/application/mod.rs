//! Application layer: service orchestration.

pub mod service;

pub use service::{assign, verify, AssignmentService};
