//! In-memory identifier source and assignment sink.
//!
//! Used by tests and by hosts that already hold the identifiers.

use crate::domain::{Assignment, PortError};
use crate::ports::{AssignmentSink, IdentifierSource};

/// Identifier source backed by a vector.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    identifiers: Vec<String>,
}

impl InMemorySource {
    /// Wrap the given identifiers.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}

impl IdentifierSource for InMemorySource {
    fn read_identifiers(&self) -> Result<Vec<String>, PortError> {
        Ok(self.identifiers.clone())
    }
}

/// Sink that collects `(user, object)` rows.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    /// Rows received so far.
    pub rows: Vec<(String, String)>,
}

impl AssignmentSink for InMemorySink {
    fn write_assignment(&mut self, assignment: &Assignment<String, String>) -> Result<usize, PortError> {
        let before = self.rows.len();
        self.rows.extend(
            assignment
                .rows()
                .map(|(user, obj)| (user.clone(), obj.clone())),
        );
        Ok(self.rows.len() - before)
    }
}
