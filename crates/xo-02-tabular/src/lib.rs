//! # XO-02: Tabular I/O
//!
//! CSV front and back ends for the assignment core:
//!
//! - [`CsvColumnReader`] pulls one identifier column out of a CSV file,
//!   by header name or by index, detecting a header row when selecting by
//!   index.
//! - [`CsvAssignmentWriter`] writes the finished assignment as
//!   `user_id,object_id` rows.
//!
//! Both implement the core's outbound ports (`IdentifierSource`,
//! `AssignmentSink`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod reader;
pub mod sniff;
pub mod writer;

pub use error::TabularError;
pub use reader::{read_column, ColumnSelector, CsvColumnReader};
pub use sniff::sniff_header;
pub use writer::{CsvAssignmentWriter, DEFAULT_OBJECT_COLUMN, DEFAULT_USER_COLUMN};
