//! Error types for tabular I/O.

use std::io;

use thiserror::Error;
use xo_01_assignment::PortError;

/// Tabular I/O errors.
#[derive(Debug, Error)]
pub enum TabularError {
    /// Opening, reading or flushing failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer rejected the data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A named column is absent from the header.
    #[error("Column '{column}' not found in CSV file. Available columns: {available:?}")]
    ColumnNotFound {
        /// Requested column name
        column: String,
        /// Header cells present
        available: Vec<String>,
    },
}

impl From<TabularError> for PortError {
    fn from(err: TabularError) -> Self {
        match err {
            TabularError::Io(e) => PortError::Io(e.to_string()),
            TabularError::Csv(e) if e.is_io_error() => PortError::Io(e.to_string()),
            other => PortError::Malformed(other.to_string()),
        }
    }
}
