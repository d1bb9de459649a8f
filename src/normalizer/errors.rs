//! # Normalizer Errors
//!
//! Data-integrity failures during result normalization. These indicate
//! store or schema drift and surface as internal errors; rows are never
//! silently dropped.

use thiserror::Error;

/// Result type for normalization
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Normalization errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A result row lacks the store-assigned identifier field
    #[error("result row {row} is missing the identifier field")]
    MissingIdentifier { row: usize },

    /// A result row is not a JSON object
    #[error("result row {row} is not an object, got {kind}")]
    NotAnObject { row: usize, kind: &'static str },
}
