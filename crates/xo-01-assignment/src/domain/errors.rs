//! # Domain Errors
//!
//! Error types for the assignment core.
//!
//! Only caller errors are represented here. Pool exhaustion during the
//! allocation phases is not an error: it degrades the output and is
//! surfaced through the verifier report instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which identifier list a duplicate was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// The user list.
    User,
    /// The object list.
    Object,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// Assignment error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// A parameter is outside its accepted range, or an input list is empty.
    #[error("Invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: &'static str,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The same identifier appears twice in one input list.
    #[error("Duplicate {kind} identifier {value} at position {position}")]
    DuplicateIdentifier {
        /// Which list
        kind: IdentifierKind,
        /// Position of the second occurrence
        position: usize,
        /// The repeated identifier, debug-formatted
        value: String,
    },

    /// The object pool cannot cover unique quotas plus one object per pair.
    #[error("Not enough objects to satisfy requirements: need at least {required}, have {available}")]
    InsufficientObjects {
        /// Minimum objects needed
        required: usize,
        /// Objects supplied
        available: usize,
    },
}

impl AssignmentError {
    pub(crate) fn invalid(parameter: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn duplicate(kind: IdentifierKind, position: usize, value: &impl fmt::Debug) -> Self {
        Self::DuplicateIdentifier {
            kind,
            position,
            value: format!("{value:?}"),
        }
    }
}

/// Errors reported by the I/O ports (identifier sources, assignment sinks).
#[derive(Debug, Error)]
pub enum PortError {
    /// The underlying reader or writer failed.
    #[error("I/O failure: {0}")]
    Io(String),

    /// The source data did not have the expected shape.
    #[error("Malformed input: {0}")]
    Malformed(String),
}
