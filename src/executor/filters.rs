//! Match-stage evaluation
//!
//! Evaluates a compiled match stage against documents. Substring terms are
//! matched case-insensitively as escaped literals; a missing field never
//! matches a containment constraint. Patterns are compiled once per stage,
//! not per document.

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::compiler::{FieldConstraint, FilterCondition, MatchStage};

use super::errors::{ExecutorError, ExecutorResult};

/// One global clause with its pattern precompiled
struct GlobalMatcher {
    pattern: Regex,
    columns: Vec<String>,
}

/// Per-field constraint with containment patterns precompiled
enum FieldMatcher {
    Contains(Regex),
    Filter(FilterCondition),
}

/// Compiled evaluator for one match stage
pub struct MatchEvaluator {
    global: Vec<GlobalMatcher>,
    fields: Vec<(String, FieldMatcher)>,
}

impl MatchEvaluator {
    /// Precompiles every containment term of the stage
    pub fn new(stage: &MatchStage) -> ExecutorResult<Self> {
        let global = stage
            .global
            .iter()
            .map(|clause| {
                Ok(GlobalMatcher {
                    pattern: containment_pattern(&clause.term)?,
                    columns: clause.columns.clone(),
                })
            })
            .collect::<ExecutorResult<Vec<_>>>()?;

        let fields = stage
            .fields
            .iter()
            .map(|(field, constraint)| {
                let matcher = match constraint {
                    FieldConstraint::Contains(text) => {
                        FieldMatcher::Contains(containment_pattern(text)?)
                    }
                    FieldConstraint::Filter(condition) => FieldMatcher::Filter(condition.clone()),
                };
                Ok((field.clone(), matcher))
            })
            .collect::<ExecutorResult<Vec<_>>>()?;

        Ok(Self { global, fields })
    }

    /// Checks if a document satisfies the whole stage.
    ///
    /// Every global clause must hold (AND across terms), each via at least
    /// one of its columns (OR across columns), and every field constraint
    /// must hold.
    pub fn matches(&self, document: &Value) -> bool {
        let globals_hold = self.global.iter().all(|clause| {
            clause
                .columns
                .iter()
                .any(|column| contains(document.get(column), &clause.pattern))
        });
        if !globals_hold {
            return false;
        }

        self.fields.iter().all(|(field, matcher)| {
            let field_value = document.get(field);
            match matcher {
                FieldMatcher::Contains(pattern) => contains(field_value, pattern),
                FieldMatcher::Filter(condition) => condition.matches(field_value),
            }
        })
    }
}

/// Case-insensitive literal-substring pattern for one term
fn containment_pattern(term: &str) -> ExecutorResult<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| ExecutorError::InvalidPattern {
            term: term.to_string(),
            reason: e.to_string(),
        })
}

/// Containment test against one field value.
///
/// Strings match directly; numbers and booleans match against their JSON
/// rendering so scoped searches like `age:42` stay useful. Arrays, objects
/// and nulls never match a substring term.
fn contains(value: Option<&Value>, pattern: &Regex) -> bool {
    let value = match value {
        Some(v) => v,
        None => return false,
    };

    match value {
        Value::String(s) => pattern.is_match(s),
        Value::Number(_) | Value::Bool(_) => pattern.is_match(&value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
