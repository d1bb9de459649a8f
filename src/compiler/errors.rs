//! # Compiler Errors
//!
//! Configuration errors raised while compiling a plan. Unlike the
//! protocol module's shape errors these indicate a server-side
//! misconfiguration (bad column set, bad sort index) and map to a
//! 5xx-equivalent at the boundary.

use thiserror::Error;

/// Result type for plan compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Configuration errors detected during compilation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompileError {
    /// Sort and projection cannot be built without columns
    #[error("column list is empty; sort and projection cannot be built")]
    EmptyColumns,

    /// Order index points outside the configured column list.
    ///
    /// Never clamped: an out-of-range index is a misconfiguration, not a
    /// request to sort by the nearest column.
    #[error("order column index {index} is out of range for {columns} columns")]
    OrderColumnOutOfRange { index: usize, columns: usize },
}
