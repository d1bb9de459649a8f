//! # Grid Response Formatting
//!
//! The response payload the grid protocol expects. The key names and value
//! types here are dictated by the client library and must be reproduced
//! exactly: `recordsTotal` and `recordsFiltered` are JSON strings, `draw`
//! is the echoed token, `data` is the normalized row array.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::request::DrawToken;

/// One normalized result row, keyed by column name plus `DT_RowId`
pub type GridRow = serde_json::Map<String, Value>;

/// Response payload for one grid request
#[derive(Debug, Clone, Serialize)]
pub struct GridResponse {
    /// Unfiltered count of the underlying collection
    #[serde(rename = "recordsTotal", serialize_with = "count_as_string")]
    pub records_total: u64,

    /// Count of rows in the returned page.
    ///
    /// The grid protocol defines this field as the filtered-but-unpaginated
    /// total; this implementation deliberately reproduces the legacy
    /// behavior of reporting the page length instead, since the executor
    /// boundary offers no filtered count. See DESIGN.md.
    #[serde(rename = "recordsFiltered", serialize_with = "count_as_string")]
    pub records_filtered: u64,

    /// Request sequence token, echoed unmodified
    pub draw: DrawToken,

    /// Normalized rows for the requested page
    pub data: Vec<GridRow>,
}

/// The protocol carries record counts as JSON strings
fn count_as_string<S: Serializer>(count: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&count.to_string())
}
