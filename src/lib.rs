//! gridquery - server-side data-grid requests compiled into document-store
//! query plans
//!
//! Control flow per request: a handler parses the grid's JSON body into a
//! [`protocol::GridRequest`], the [`compiler`] turns it into an immutable
//! stage plan, a [`executor::QueryExecutor`] runs the plan plus an
//! unfiltered count, and the [`normalizer`] rewrites the raw rows into the
//! grid's response payload. [`service::run_grid_query`] composes the whole
//! chain. No state survives a request.

pub mod compiler;
pub mod executor;
pub mod normalizer;
pub mod protocol;
pub mod service;

pub use compiler::{compile, CustomFilter, QueryPlan};
pub use executor::{MemoryExecutor, QueryExecutor};
pub use normalizer::normalize;
pub use protocol::{GridRequest, GridResponse};
pub use service::{run_grid_query, GridError};
