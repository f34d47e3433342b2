//! CSV assignment writer.
//!
//! Serializes an assignment as a header row followed by one
//! `(user, object)` row per assigned object, users in input order. The
//! header is written once per destination; later writes append rows.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;
use xo_01_assignment::{Assignment, AssignmentSink, PortError};

use crate::error::TabularError;

/// Default header for the user column.
pub const DEFAULT_USER_COLUMN: &str = "user_id";

/// Default header for the object column.
pub const DEFAULT_OBJECT_COLUMN: &str = "object_id";

/// Writes `(user, object)` rows to a CSV destination.
pub struct CsvAssignmentWriter<W: io::Write> {
    writer: csv::Writer<W>,
    user_column: String,
    object_column: String,
    header_written: bool,
}

impl CsvAssignmentWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TabularError> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: io::Write> CsvAssignmentWriter<W> {
    /// Writer with the default `user_id,object_id` header.
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
            user_column: DEFAULT_USER_COLUMN.to_string(),
            object_column: DEFAULT_OBJECT_COLUMN.to_string(),
            header_written: false,
        }
    }

    /// Override the header names.
    pub fn with_headers(mut self, user_column: impl Into<String>, object_column: impl Into<String>) -> Self {
        self.user_column = user_column.into();
        self.object_column = object_column.into();
        self
    }

    /// Write every row, preceded by the header on the first call, then
    /// flush. Returns the row count, header excluded.
    pub fn write<U, O>(&mut self, assignment: &Assignment<U, O>) -> Result<usize, TabularError>
    where
        U: AsRef<str>,
        O: AsRef<str>,
    {
        if !self.header_written {
            self.writer
                .write_record([self.user_column.as_str(), self.object_column.as_str()])?;
            self.header_written = true;
        }

        let mut rows = 0;
        for (user, obj) in assignment.rows() {
            self.writer.write_record([user.as_ref(), obj.as_ref()])?;
            rows += 1;
        }
        self.writer.flush()?;

        info!(rows, "Assignments written");
        Ok(rows)
    }

    /// Recover the destination.
    pub fn into_inner(self) -> Result<W, TabularError> {
        self.writer
            .into_inner()
            .map_err(|e| TabularError::Io(e.into_error()))
    }
}

impl<W: io::Write> AssignmentSink for CsvAssignmentWriter<W> {
    fn write_assignment(&mut self, assignment: &Assignment<String, String>) -> Result<usize, PortError> {
        self.write(assignment).map_err(PortError::from)
    }
}
