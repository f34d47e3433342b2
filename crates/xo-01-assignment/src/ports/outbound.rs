//! Outbound Ports (Driven Ports / SPI)

use crate::domain::{Assignment, PortError};

/// Source of the permutation the unique allocator draws from.
///
/// Implementations own their randomness; nothing process-wide is used.
pub trait ObjectShuffler {
    /// A permutation of `0..len`. Anything else (wrong length, out-of-range
    /// or repeated positions) makes the pipeline reject the run with
    /// `InvalidParameter`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Supplies user or object identifiers in a stable order.
pub trait IdentifierSource {
    /// Read all identifiers.
    fn read_identifiers(&self) -> Result<Vec<String>, PortError>;
}

/// Consumes a finished assignment as `(user, object)` rows.
pub trait AssignmentSink {
    /// Write every row; returns the number of rows written.
    fn write_assignment(&mut self, assignment: &Assignment<String, String>) -> Result<usize, PortError>;
}
