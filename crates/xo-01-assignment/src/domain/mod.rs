//! # Domain Module
//!
//! Core domain types for the assignment subsystem.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod report;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use report::*;
pub use value_objects::*;
