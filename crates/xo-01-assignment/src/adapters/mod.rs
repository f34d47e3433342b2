//! # Adapters
//!
//! In-crate implementations of the outbound ports.

pub mod memory;
pub mod shuffler;

pub use memory::{InMemorySink, InMemorySource};
pub use shuffler::{InputOrderShuffler, SeededShuffler};
