//! # Caller-Supplied Filters
//!
//! Structured filters injected by the request handler (for example "only
//! rows owned by this tenant"). Conditions use the store's own operator
//! vocabulary so a caller can express more than equality; they merge into
//! the match stage after the search clauses and win on field collision.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Equals
    #[serde(rename = "eq")]
    Eq,

    /// Not equals
    #[serde(rename = "neq")]
    Neq,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,

    /// Pattern match (LIKE, `%`/`_` wildcards)
    #[serde(rename = "like")]
    Like,

    /// Value in list
    #[serde(rename = "in")]
    In,

    /// Is null/not null
    #[serde(rename = "is")]
    Is,
}

impl FilterOperator {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Like => "like",
            FilterOperator::In => "in",
            FilterOperator::Is => "is",
        }
    }
}

/// One operator + comparison value, applied to a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Comparison operator
    pub operator: FilterOperator,

    /// Value to compare against
    pub value: Value,
}

impl FilterCondition {
    /// Create a condition from operator and value
    pub fn new(operator: FilterOperator, value: Value) -> Self {
        Self { operator, value }
    }

    /// Equality condition
    pub fn eq(value: Value) -> Self {
        Self::new(FilterOperator::Eq, value)
    }

    /// Greater-than condition
    pub fn gt(value: Value) -> Self {
        Self::new(FilterOperator::Gt, value)
    }

    /// Membership condition
    pub fn in_list(values: Vec<Value>) -> Self {
        Self::new(FilterOperator::In, Value::Array(values))
    }

    /// Evaluates the condition against a field value.
    ///
    /// A missing field only satisfies `is null`.
    pub fn matches(&self, field_value: Option<&Value>) -> bool {
        let field_value = match field_value {
            Some(v) => v,
            None => return self.operator == FilterOperator::Is && self.value.is_null(),
        };

        match self.operator {
            FilterOperator::Eq => field_value == &self.value,
            FilterOperator::Neq => field_value != &self.value,
            FilterOperator::Gt => compare_json_values(field_value, &self.value) > 0,
            FilterOperator::Gte => compare_json_values(field_value, &self.value) >= 0,
            FilterOperator::Lt => compare_json_values(field_value, &self.value) < 0,
            FilterOperator::Lte => compare_json_values(field_value, &self.value) <= 0,
            FilterOperator::Like => {
                if let (Some(field_str), Some(pattern)) =
                    (field_value.as_str(), self.value.as_str())
                {
                    matches_like_pattern(field_str, pattern)
                } else {
                    false
                }
            }
            FilterOperator::In => {
                if let Some(arr) = self.value.as_array() {
                    arr.contains(field_value)
                } else {
                    false
                }
            }
            FilterOperator::Is => {
                if self.value.is_null() {
                    field_value.is_null()
                } else {
                    !field_value.is_null()
                }
            }
        }
    }
}

/// Ordered set of caller-injected field conditions.
///
/// Entry order matters only when two entries target the same field: the
/// later entry overwrites the earlier one during the match-stage merge,
/// consistent with the merge precedence of the whole stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFilter {
    entries: Vec<(String, FilterCondition)>,
}

impl CustomFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition on a field
    pub fn with(mut self, field: impl Into<String>, condition: FilterCondition) -> Self {
        self.entries.push((field.into(), condition));
        self
    }

    /// Adds an equality condition on a field
    pub fn eq(self, field: impl Into<String>, value: Value) -> Self {
        self.with(field, FilterCondition::eq(value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterCondition)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c))
    }
}

/// Compare two JSON values for ordering
fn compare_json_values(a: &Value, b: &Value) -> i32 {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a_f = a.as_f64().unwrap_or(0.0);
            let b_f = b.as_f64().unwrap_or(0.0);
            if a_f < b_f {
                -1
            } else if a_f > b_f {
                1
            } else {
                0
            }
        }
        (Value::String(a), Value::String(b)) => a.cmp(b) as i32,
        _ => 0,
    }
}

/// Simple LIKE pattern matching (% = any sequence, _ = single char)
fn matches_like_pattern(value: &str, pattern: &str) -> bool {
    let pattern = pattern.replace('%', "*").replace('_', "?");
    simple_pattern_match(value, &pattern)
}

/// Simple wildcard pattern matching
fn simple_pattern_match(value: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return value.is_empty();
    }

    let mut pattern_chars = pattern.chars().peekable();
    let mut value_chars = value.chars().peekable();

    loop {
        match (pattern_chars.peek(), value_chars.peek()) {
            (None, None) => return true,
            (Some('*'), _) => {
                pattern_chars.next();
                if pattern_chars.peek().is_none() {
                    return true; // Trailing * matches everything
                }
                // Try matching rest of pattern at each position
                while value_chars.peek().is_some() {
                    if simple_pattern_match(
                        &value_chars.clone().collect::<String>(),
                        &pattern_chars.clone().collect::<String>(),
                    ) {
                        return true;
                    }
                    value_chars.next();
                }
                return false;
            }
            (Some('?'), Some(_)) => {
                pattern_chars.next();
                value_chars.next();
            }
            (Some(p), Some(v)) if p == v => {
                pattern_chars.next();
                value_chars.next();
            }
            _ => return false,
        }
    }
}
