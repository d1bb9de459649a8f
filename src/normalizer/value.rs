//! Value kind classification
//!
//! A closed set of value kinds with a total mapping to their normalization
//! action. Making the branching explicit here means a future value kind
//! fails to compile instead of slipping through an untyped type check.

use serde_json::Value;

/// Closed set of stored value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    /// Whole number representable as i64/u64
    Int,
    /// Any other numeric value
    Float,
    Str,
    List,
    Map,
}

impl ValueKind {
    /// Classifies a stored value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ValueKind::Int
                } else {
                    ValueKind::Float
                }
            }
            Value::String(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Map,
        }
    }

    /// True for kinds the grid cannot render as-is.
    ///
    /// Composites break client-side cell renderers and floats are
    /// stringified to keep precision consistent across the wire; the
    /// remaining scalars pass through unchanged.
    pub fn needs_stringify(&self) -> bool {
        matches!(self, ValueKind::Float | ValueKind::List | ValueKind::Map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification_is_total() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(7)), ValueKind::Int);
        assert_eq!(ValueKind::of(&json!(-7)), ValueKind::Int);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::Str);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::List);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Map);
    }

    #[test]
    fn test_stringify_set() {
        assert!(ValueKind::Float.needs_stringify());
        assert!(ValueKind::List.needs_stringify());
        assert!(ValueKind::Map.needs_stringify());

        assert!(!ValueKind::Null.needs_stringify());
        assert!(!ValueKind::Bool.needs_stringify());
        assert!(!ValueKind::Int.needs_stringify());
        assert!(!ValueKind::Str.needs_stringify());
    }

    #[test]
    fn test_large_u64_is_int() {
        assert_eq!(ValueKind::of(&json!(u64::MAX)), ValueKind::Int);
    }
}
