//! # Integration Tests
//!
//! End-to-end tests across the assignment core and the CSV adapters.

pub mod pipeline;
pub mod properties;
pub mod scenarios;
