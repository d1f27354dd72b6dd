use std::path::PathBuf;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while loading or querying a [`PropertyTable`](super::PropertyTable).
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be read.
    #[error("failed to read property table {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table has no header row.
    #[error("property table is empty")]
    Empty,

    /// A required column is missing from the header.
    #[error("property table is missing column {column:?}")]
    MissingColumn { column: &'static str },

    /// A row has more fields than the header.
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric cell could not be parsed.
    #[error("line {line}: invalid number {value:?} in column {column:?}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// A molecular weight is zero, negative, or missing.
    #[error("line {line}: invalid molecular weight for {name}")]
    InvalidMolarMass {
        line: usize,
        name: String,
        #[source]
        source: ConstraintError,
    },

    /// The requested compound is not in the table.
    #[error("compound {name:?} not found in property table")]
    UnknownCompound { name: String },
}
