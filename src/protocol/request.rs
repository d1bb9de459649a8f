//! # Grid Request Parsing
//!
//! Parses the grid protocol's JSON request body into a validated
//! [`GridRequest`]. Parsing happens exactly once, at the boundary: missing
//! keys and wrong types surface here as [`RequestError`] instead of failing
//! deep inside the pipeline compiler.
//!
//! Protocol fields the core does not consume (per-column `searchable` /
//! `orderable` flags, per-column search boxes) are accepted and ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ProtocolResult, RequestError};
use crate::compiler::SortDirection;

/// Page length sentinel meaning "no limit" on the wire
pub const UNLIMITED_SENTINEL: i64 = -1;

/// Wire shape of one column descriptor
#[derive(Debug, Clone, Deserialize)]
struct WireColumn {
    data: String,
}

/// Wire shape of one order clause
#[derive(Debug, Clone, Deserialize)]
struct WireOrder {
    column: i64,
    dir: String,
}

/// Wire shape of the global search box
#[derive(Debug, Clone, Deserialize)]
struct WireSearch {
    value: String,
}

/// Raw request body as the grid sends it
#[derive(Debug, Clone, Deserialize)]
struct WireRequest {
    columns: Vec<WireColumn>,
    order: Vec<WireOrder>,
    search: WireSearch,
    start: i64,
    length: i64,
    draw: DrawToken,
}

/// Opaque request sequence token, echoed back unmodified.
///
/// The grid uses it to discard stale responses. The core never interprets
/// it; integer and string forms both pass through byte-exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrawToken {
    Int(i64),
    Text(String),
}

/// Requested page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLength {
    /// Wire length was the `-1` sentinel: no cap on returned rows
    Unlimited,
    /// Hard cap on returned rows
    Limited(u64),
}

/// Validated grid request, immutable for the duration of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    /// Projectable/searchable field set; order is significant
    pub columns: Vec<String>,
    /// Index into `columns` selecting the sort field
    pub order_column_index: usize,
    /// Sort direction for the selected column
    pub order_direction: SortDirection,
    /// Raw free-text value from the global search box
    pub search_value: String,
    /// Number of matched rows to skip
    pub page_start: u64,
    /// Page cap, or unlimited
    pub page_length: PageLength,
    /// Opaque sequence token to echo back
    pub draw: DrawToken,
}

impl GridRequest {
    /// Parses and validates a grid protocol request body.
    ///
    /// Only the first `order` entry is consumed; multi-key sort is not part
    /// of the supported protocol subset.
    pub fn parse(body: &Value) -> ProtocolResult<Self> {
        let wire: WireRequest = serde_json::from_value(body.clone())
            .map_err(|e| RequestError::MalformedBody(e.to_string()))?;

        let order = wire.order.first().ok_or(RequestError::EmptyOrder)?;

        let order_direction = match order.dir.as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(RequestError::UnknownDirection(other.to_string())),
        };

        if order.column < 0 {
            return Err(RequestError::NegativeOrderColumn(order.column));
        }
        if wire.start < 0 {
            return Err(RequestError::NegativeStart(wire.start));
        }

        let page_length = match wire.length {
            UNLIMITED_SENTINEL => PageLength::Unlimited,
            n if n < 0 => return Err(RequestError::InvalidPageLength(n)),
            n => PageLength::Limited(n as u64),
        };

        Ok(Self {
            columns: wire.columns.into_iter().map(|c| c.data).collect(),
            order_column_index: order.column as usize,
            order_direction,
            search_value: wire.search.value,
            page_start: wire.start as u64,
            page_length,
            draw: wire.draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "columns": [{"data": "name"}, {"data": "age"}],
            "order": [{"column": 1, "dir": "desc"}],
            "search": {"value": "smith"},
            "start": 20,
            "length": 10,
            "draw": 3
        })
    }

    #[test]
    fn test_parse_valid_request() {
        let req = GridRequest::parse(&body()).unwrap();

        assert_eq!(req.columns, vec!["name", "age"]);
        assert_eq!(req.order_column_index, 1);
        assert_eq!(req.order_direction, SortDirection::Desc);
        assert_eq!(req.search_value, "smith");
        assert_eq!(req.page_start, 20);
        assert_eq!(req.page_length, PageLength::Limited(10));
        assert_eq!(req.draw, DrawToken::Int(3));
    }

    #[test]
    fn test_length_sentinel_means_unlimited() {
        let mut b = body();
        b["length"] = json!(-1);

        let req = GridRequest::parse(&b).unwrap();
        assert_eq!(req.page_length, PageLength::Unlimited);
    }

    #[test]
    fn test_length_below_sentinel_rejected() {
        let mut b = body();
        b["length"] = json!(-2);

        assert_eq!(
            GridRequest::parse(&b),
            Err(RequestError::InvalidPageLength(-2))
        );
    }

    #[test]
    fn test_missing_key_is_shape_error() {
        let mut b = body();
        b.as_object_mut().unwrap().remove("search");

        assert!(matches!(
            GridRequest::parse(&b),
            Err(RequestError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_empty_order_rejected() {
        let mut b = body();
        b["order"] = json!([]);

        assert_eq!(GridRequest::parse(&b), Err(RequestError::EmptyOrder));
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let mut b = body();
        b["order"][0]["dir"] = json!("sideways");

        assert_eq!(
            GridRequest::parse(&b),
            Err(RequestError::UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_string_draw_token_accepted() {
        let mut b = body();
        b["draw"] = json!("7");

        let req = GridRequest::parse(&b).unwrap();
        assert_eq!(req.draw, DrawToken::Text("7".to_string()));
    }

    #[test]
    fn test_extra_protocol_fields_ignored() {
        let mut b = body();
        b["columns"][0]["searchable"] = json!(true);
        b["columns"][0]["orderable"] = json!(false);

        assert!(GridRequest::parse(&b).is_ok());
    }

    #[test]
    fn test_negative_start_rejected() {
        let mut b = body();
        b["start"] = json!(-5);

        assert_eq!(GridRequest::parse(&b), Err(RequestError::NegativeStart(-5)));
    }
}
