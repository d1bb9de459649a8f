//! # Protocol Errors
//!
//! Request-shape errors raised while parsing the grid's wire body.
//! These map to client errors at the boundary; misconfiguration errors
//! live in the compiler module instead.

use thiserror::Error;

/// Result type for wire-request parsing
pub type ProtocolResult<T> = Result<T, RequestError>;

/// Errors for requests that do not conform to the grid protocol shape
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// Body is missing required keys or has wrong value types
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The order list must carry at least one entry
    #[error("order must contain at least one entry")]
    EmptyOrder,

    /// Order direction token is neither "asc" nor "desc"
    #[error("unknown order direction: {0:?}")]
    UnknownDirection(String),

    /// Negative order column index
    #[error("order column index must be non-negative, got {0}")]
    NegativeOrderColumn(i64),

    /// Negative paging offset
    #[error("start must be non-negative, got {0}")]
    NegativeStart(i64),

    /// Page length below the no-limit sentinel
    #[error("length must be -1 (unlimited) or non-negative, got {0}")]
    InvalidPageLength(i64),
}
