//! Row sorting
//!
//! Stable, deterministic single-key sort over raw result rows.

use std::cmp::Ordering;

use serde_json::Value;

use crate::compiler::{SortDirection, SortSpec};

/// Sorts rows in place according to the sort specification.
///
/// The sort is stable, so rows with equal keys keep their stored order and
/// repeated requests page consistently.
pub fn sort_rows(rows: &mut [Value], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = compare_values(a.get(&spec.field), b.get(&spec.field));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Compares two optional field values.
///
/// Missing values sort first; present values order by type rank
/// (null < bool < number < string < array < object), then naturally within
/// the same type. Arrays and objects are not compared internally.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let rank_a = type_rank(a);
            let rank_b = type_rank(b);
            if rank_a != rank_b {
                return rank_a.cmp(&rank_b);
            }
            match (a, b) {
                (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
                (Value::Number(x), Value::Number(y)) => {
                    let xf = x.as_f64().unwrap_or(0.0);
                    let yf = y.as_f64().unwrap_or(0.0);
                    xf.partial_cmp(&yf).unwrap_or(Ordering::Equal)
                }
                (Value::String(x), Value::String(y)) => x.cmp(y),
                _ => Ordering::Equal,
            }
        }
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ascending_string_sort() {
        let mut rows = vec![
            json!({"name": "Carol"}),
            json!({"name": "Alice"}),
            json!({"name": "Bob"}),
        ];
        sort_rows(&mut rows, &SortSpec::asc("name"));

        let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_descending_numeric_sort() {
        let mut rows = vec![json!({"age": 30}), json!({"age": 45}), json!({"age": 19})];
        sort_rows(&mut rows, &SortSpec::desc("age"));

        let ages: Vec<i64> = rows.iter().map(|r| r["age"].as_i64().unwrap()).collect();
        assert_eq!(ages, vec![45, 30, 19]);
    }

    #[test]
    fn test_missing_field_sorts_first() {
        let mut rows = vec![json!({"name": "Alice"}), json!({"city": "Rome"})];
        sort_rows(&mut rows, &SortSpec::asc("name"));

        assert!(rows[0].get("name").is_none());
    }

    #[test]
    fn test_mixed_types_order_by_rank() {
        let mut rows = vec![
            json!({"v": "text"}),
            json!({"v": 7}),
            json!({"v": true}),
            json!({"v": null}),
        ];
        sort_rows(&mut rows, &SortSpec::asc("v"));

        assert!(rows[0]["v"].is_null());
        assert!(rows[1]["v"].is_boolean());
        assert!(rows[2]["v"].is_number());
        assert!(rows[3]["v"].is_string());
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut rows = vec![
            json!({"name": "Ann", "n": 1}),
            json!({"name": "Ann", "n": 2}),
            json!({"name": "Ann", "n": 3}),
        ];
        sort_rows(&mut rows, &SortSpec::asc("name"));

        let order: Vec<i64> = rows.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
