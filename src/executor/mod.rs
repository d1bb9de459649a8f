//! Query Executor boundary
//!
//! The consumed interface between the core and the document store. The
//! service issues exactly two independent, synchronous calls per request:
//! an unfiltered count and the compiled pipeline. Store failures propagate
//! through the associated error type unchanged; retry and cancellation
//! policy lives on the executor side of this boundary, never in the
//! compiler.
//!
//! # Execution Flow (strict order)
//!
//! 1. Apply the match stage to the full collection
//! 2. Sort surviving documents
//! 3. Skip to the page start
//! 4. Project the configured columns (empty-string default)
//! 5. Apply the page cap, if any

use serde_json::Value;

use crate::compiler::QueryPlan;

mod errors;
mod filters;
mod memory;
mod sorter;

pub use errors::{ExecutorError, ExecutorResult};
pub use filters::MatchEvaluator;
pub use memory::{MemoryExecutor, ID_FIELD};
pub use sorter::sort_rows;

/// Runs compiled plans against a document collection.
///
/// Implementations must execute the plan's stages in their given order and
/// must not cache or deduplicate calls across requests.
pub trait QueryExecutor {
    /// Store-side failure type, propagated to the caller unchanged
    type Error: std::error::Error + Send + Sync + 'static;

    /// Total document count of the collection, unfiltered
    fn count(&self) -> Result<u64, Self::Error>;

    /// Executes the stage list and returns the raw result rows
    fn run_pipeline(&self, plan: &QueryPlan) -> Result<Vec<Value>, Self::Error>;
}
