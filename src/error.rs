//! Error types for matrix construction, loading and multiplication.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for parmatmul operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid matrix dimensions {rows}x{columns}: both must be positive")]
    InvalidDimension { rows: i64, columns: i64 },

    #[error("matrix operand is missing")]
    NullOperand,

    #[error(
        "matrix dimension mismatch: A is {first_rows}x{first_columns}, B is {second_rows}x{second_columns}"
    )]
    DimensionMismatch {
        first_rows: usize,
        first_columns: usize,
        second_rows: usize,
        second_columns: usize,
    },

    #[error("index ({row}, {column}) out of range for {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("format error at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("no samples to summarize")]
    EmptySamples,
}

impl Error {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Error::Format {
            line,
            reason: reason.into(),
        }
    }
}
