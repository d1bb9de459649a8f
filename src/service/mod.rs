//! Grid query service
//!
//! Composes the pipeline compiler, the query executor and the result
//! normalizer into the single entry point a request handler calls. The
//! core retains no state across requests: every plan is rebuilt, both
//! executor calls are issued fresh, and nothing is cached or retried.

use thiserror::Error;

use crate::compiler::{compile, CompileError, CustomFilter};
use crate::executor::QueryExecutor;
use crate::normalizer::{normalize, NormalizeError};
use crate::protocol::{GridRequest, GridResponse, RequestError};

/// Unified error for one grid query, discriminated by origin.
///
/// Request errors map to client responses, compile errors to server
/// misconfiguration, normalize errors to data-integrity faults. Executor
/// failures are carried unchanged; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum GridError<E: std::error::Error> {
    /// Request body does not conform to the grid protocol shape
    #[error("invalid grid request: {0}")]
    Request(#[from] RequestError),

    /// Server-side column/sort configuration is inconsistent
    #[error("grid configuration error: {0}")]
    Compile(#[from] CompileError),

    /// A result row violated normalization expectations
    #[error("result normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// Store failure, propagated unreinterpreted
    #[error("executor failure: {0}")]
    Executor(E),
}

/// Runs one grid query end to end.
///
/// Issues the unfiltered count and the compiled pipeline as two
/// independent, synchronous executor calls, then normalizes the result
/// page into the protocol response. `records_filtered` reports the length
/// of the returned page (legacy-compatible; see DESIGN.md) and `draw`
/// echoes the request token untouched.
pub fn run_grid_query<E: QueryExecutor>(
    executor: &E,
    request: &GridRequest,
    custom_filter: &CustomFilter,
) -> Result<GridResponse, GridError<E::Error>> {
    let plan = compile(request, custom_filter)?;

    let records_total = executor.count().map_err(GridError::Executor)?;
    let rows = executor.run_pipeline(&plan).map_err(GridError::Executor)?;
    let data = normalize(rows)?;

    Ok(GridResponse {
        records_total,
        records_filtered: data.len() as u64,
        draw: request.draw.clone(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::SortDirection;
    use crate::executor::MemoryExecutor;
    use crate::protocol::{DrawToken, PageLength};
    use serde_json::json;

    fn executor() -> MemoryExecutor {
        MemoryExecutor::from_documents(vec![
            json!({"_id": "1", "name": "Ann", "age": 34}),
            json!({"_id": "2", "name": "Bob", "age": 41}),
        ])
        .unwrap()
    }

    fn request() -> GridRequest {
        GridRequest {
            columns: vec!["name".to_string(), "age".to_string()],
            order_column_index: 0,
            order_direction: SortDirection::Asc,
            search_value: String::new(),
            page_start: 0,
            page_length: PageLength::Limited(10),
            draw: DrawToken::Int(5),
        }
    }

    #[test]
    fn test_response_assembly() {
        let response = run_grid_query(&executor(), &request(), &CustomFilter::new()).unwrap();

        assert_eq!(response.records_total, 2);
        assert_eq!(response.records_filtered, 2);
        assert_eq!(response.draw, DrawToken::Int(5));
        assert_eq!(response.data[0]["DT_RowId"], json!("1"));
    }

    #[test]
    fn test_filtered_count_is_page_length() {
        let mut req = request();
        req.page_length = PageLength::Limited(1);

        let response = run_grid_query(&executor(), &req, &CustomFilter::new()).unwrap();
        assert_eq!(response.records_total, 2);
        assert_eq!(response.records_filtered, 1);
    }

    #[test]
    fn test_compile_error_surfaces() {
        let mut req = request();
        req.columns.clear();

        let result = run_grid_query(&executor(), &req, &CustomFilter::new());
        assert!(matches!(
            result,
            Err(GridError::Compile(CompileError::EmptyColumns))
        ));
    }
}
