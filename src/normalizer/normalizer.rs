//! Result normalization
//!
//! Rewrites raw result rows into grid-safe rows: the store identifier
//! becomes the `DT_RowId` attribute the grid uses to track row identity
//! across redraws, and values the grid cannot render (composites, floats)
//! are replaced by their canonical JSON string. This is a lossy,
//! display-oriented transform; callers needing structured access to nested
//! fields must bypass it.

use serde_json::Value;

use crate::executor::ID_FIELD;
use crate::protocol::GridRow;

use super::errors::{NormalizeError, NormalizeResult};
use super::value::ValueKind;

/// Row-identity attribute consumed by the grid
pub const ROW_ID_FIELD: &str = "DT_RowId";

/// Normalizes a batch of raw rows.
///
/// Fails on the first row without an identifier; a missing `_id` is a
/// data-integrity violation, never a row to skip.
pub fn normalize(rows: Vec<Value>) -> NormalizeResult<Vec<GridRow>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index))
        .collect()
}

fn normalize_row(row: Value, index: usize) -> NormalizeResult<GridRow> {
    let mut map = match row {
        Value::Object(map) => map,
        other => {
            return Err(NormalizeError::NotAnObject {
                row: index,
                kind: kind_name(&other),
            })
        }
    };

    let id = map
        .remove(ID_FIELD)
        .ok_or(NormalizeError::MissingIdentifier { row: index })?;

    let mut out = GridRow::new();
    out.insert(ROW_ID_FIELD.to_string(), Value::String(canonical_id(&id)));
    for (key, value) in map {
        out.insert(key, normalize_value(value));
    }
    Ok(out)
}

/// Canonical string form of a store identifier.
///
/// String ids pass through verbatim; anything else uses its compact JSON
/// rendering.
fn canonical_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Total mapping from value kind to normalization action
fn normalize_value(value: Value) -> Value {
    if ValueKind::of(&value).needs_stringify() {
        // Value's Display renders compact JSON and cannot fail.
        Value::String(value.to_string())
    } else {
        value
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
