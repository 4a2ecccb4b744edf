//! Conversion error types.
//!
//! Every variant is fatal: the run stops at the first error and no partial
//! ABox is written.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building an ABox.
#[derive(Debug, Error)]
pub enum AboxError {
    /// A file could not be opened, read, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TBox is not valid Turtle.
    #[error("failed to parse TBox {}: {message}", path.display())]
    Tbox {
        /// The TBox file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The CSV reader rejected the input (bad quoting, invalid UTF-8, ...).
    #[error("CSV error in {file}: {source}")]
    Csv {
        /// The CSV file name.
        file: String,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A mapping names a column the CSV header does not have.
    #[error("column not found: {column} in {file}")]
    ColumnNotFound {
        /// The missing column.
        column: String,
        /// The CSV file name.
        file: String,
    },

    /// A data row ends before a mapped column.
    #[error("row {line} of {file} has no cell for column {column}")]
    ShortRow {
        /// The CSV file name.
        file: String,
        /// 1-based line number of the row.
        line: u64,
        /// The column whose cell is missing.
        column: String,
    },

    /// The mapping configuration is invalid.
    #[error("invalid mapping configuration: {0}")]
    Config(String),
}

/// Result type for ABox operations.
pub type Result<T> = std::result::Result<T, AboxError>;

impl AboxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AboxError::Io {
            path: path.into(),
            source,
        }
    }
}
