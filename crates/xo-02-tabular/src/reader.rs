//! CSV column reader.
//!
//! Reads one column of identifiers from a CSV file, selected by header name
//! or by zero-based index.

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;
use xo_01_assignment::{IdentifierSource, PortError};

use crate::error::TabularError;
use crate::sniff::sniff_header;

/// Which column to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Header cell name. The first row is always treated as the header.
    Name(String),
    /// Zero-based index. A sniffed header row is skipped.
    Index(usize),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl FromStr for ColumnSelector {
    type Err = Infallible;

    /// All-digit strings select by index, anything else by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) if s.bytes().all(|b| b.is_ascii_digit()) => Self::Index(index),
            _ => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Reads a single identifier column from a CSV file.
#[derive(Clone, Debug)]
pub struct CsvColumnReader {
    path: PathBuf,
    column: ColumnSelector,
}

impl CsvColumnReader {
    /// Reader for `column` of the file at `path`.
    pub fn new(path: impl AsRef<Path>, column: ColumnSelector) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            column,
        }
    }

    /// Read the column from the file.
    pub fn read(&self) -> Result<Vec<String>, TabularError> {
        let file = std::fs::File::open(&self.path)?;
        let values = read_column(file, &self.column)?;
        debug!(
            path = %self.path.display(),
            column = %self.column,
            values = values.len(),
            "Read CSV column"
        );
        Ok(values)
    }
}

impl IdentifierSource for CsvColumnReader {
    fn read_identifiers(&self) -> Result<Vec<String>, PortError> {
        self.read().map_err(PortError::from)
    }
}

/// Read `column` from any CSV byte stream.
pub fn read_column<R: io::Read>(input: R, column: &ColumnSelector) -> Result<Vec<String>, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    match column {
        ColumnSelector::Name(name) => {
            let Some((header, data)) = rows.split_first() else {
                return Err(TabularError::ColumnNotFound {
                    column: name.clone(),
                    available: Vec::new(),
                });
            };
            let Some(index) = header.iter().position(|cell| cell == name) else {
                return Err(TabularError::ColumnNotFound {
                    column: name.clone(),
                    available: header.clone(),
                });
            };
            Ok(collect_column(data, index))
        }
        ColumnSelector::Index(index) => {
            let data = if sniff_header(&rows) { &rows[1..] } else { &rows[..] };
            Ok(collect_column(data, *index))
        }
    }
}

fn collect_column(rows: &[Vec<String>], index: usize) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get(index).cloned())
        .collect()
}
