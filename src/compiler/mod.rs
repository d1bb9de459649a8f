//! Pipeline Compiler subsystem
//!
//! Turns one validated grid request plus caller-supplied filters into an
//! ordered query-stage plan, deterministically and without touching the
//! store.
//!
//! # Compilation Flow (strict order)
//!
//! 1. Validate the column set and the order index
//! 2. Tokenize and classify the search value (colon rule)
//! 3. Build the global-search clauses (AND of per-term ORs)
//! 4. Build the per-field constraints (scoped terms, last wins)
//! 5. Merge in the caller filter (overwrites on field collision)
//! 6. Assemble match → sort → skip → project → limit
//!
//! # Invariants
//!
//! - Compilation is pure: same inputs, same plan
//! - Stage order is never rearranged
//! - Out-of-range order indices fail, never clamp

mod compiler;
mod errors;
mod filter;
mod stages;
mod terms;

pub use compiler::compile;
pub use errors::{CompileError, CompileResult};
pub use filter::{CustomFilter, FilterCondition, FilterOperator};
pub use stages::{
    FieldConstraint, GlobalClause, MatchStage, Projection, QueryPlan, SortDirection, SortSpec,
    Stage,
};
pub use terms::{tokenize, SearchTerm};
