//! # Executor Errors
//!
//! Failures of the in-memory reference executor. Remote-store executors
//! carry their own error types through the [`QueryExecutor`] associated
//! error instead.
//!
//! [`QueryExecutor`]: super::QueryExecutor

use thiserror::Error;

/// Result type for the memory executor
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Memory executor errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    /// Stored documents must be JSON objects
    #[error("document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A search term failed to compile into a containment pattern
    #[error("invalid match pattern for term {term:?}: {reason}")]
    InvalidPattern { term: String, reason: String },
}
