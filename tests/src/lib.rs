//! # Crossover Assignment Test Suite
//!
//! Unified test crate for the workspace.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── scenarios.rs    # Fixed-input pipeline scenarios
//! │   ├── properties.rs   # proptest invariants over random populations
//! │   └── pipeline.rs     # CSV in, assignment, CSV out
//! └── benches/
//!     └── assignment_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xo-tests
//!
//! # By category
//! cargo test -p xo-tests integration::properties::
//!
//! # Benchmarks
//! cargo bench -p xo-tests
//! ```

pub mod integration;
