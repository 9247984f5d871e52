//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated exercise preconditions.
/// Every check runs before the input is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("matrix is not square: {rows} rows but row {row} has {len} columns")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },

    #[error("invalid color {value} at index {index} (expected 0, 1 or 2)")]
    InvalidColor { index: usize, value: i32 },

    #[error("input is not ascending at index {index}")]
    NotAscending { index: usize },

    #[error("zero cannot be raised to negative power {exp}")]
    ZeroToNegativePower { exp: i64 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
