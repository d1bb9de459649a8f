//! Query plan structures
//!
//! The compiled, immutable representation of one grid request: an ordered
//! list of stages the executor runs verbatim. Built once per request, never
//! mutated afterwards, and independent of any live store so plans can be
//! inspected and unit-tested on their own.

use std::collections::BTreeMap;

use super::filter::FilterCondition;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Single-key sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// One global search term widened across all configured columns.
///
/// A document satisfies the clause when at least one column contains the
/// term case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalClause {
    /// Raw term text, matched as a literal substring
    pub term: String,
    /// Columns the term may match against
    pub columns: Vec<String>,
}

/// Constraint applied to one field of the match stage
#[derive(Debug, Clone, PartialEq)]
pub enum FieldConstraint {
    /// Case-insensitive substring containment (from a scoped search term)
    Contains(String),
    /// Caller-injected operator condition
    Filter(FilterCondition),
}

/// Filter predicate applied before sorting and paging.
///
/// Global clauses are conjoined: every clause must independently match.
/// Field constraints are keyed by field name; the merge that builds them
/// (scoped terms first, caller filter last) resolves collisions by
/// overwrite, so the map holds exactly the winning constraint per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStage {
    /// Per-term OR-across-columns clauses, all of which must hold
    pub global: Vec<GlobalClause>,
    /// Winning constraint per field after the precedence merge
    pub fields: BTreeMap<String, FieldConstraint>,
}

impl MatchStage {
    /// An empty match stage matches every document
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.fields.is_empty()
    }
}

/// Field-selection stage.
///
/// Every listed column is present in each output row, with an empty string
/// substituted when the stored document lacks the field. The store-assigned
/// identifier is carried through untouched for the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub columns: Vec<String>,
}

/// One executable stage
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Match(MatchStage),
    Sort(SortSpec),
    Skip(u64),
    Project(Projection),
    Limit(u64),
}

/// Ordered, immutable stage list for one request.
///
/// Stage order is semantically required: sorting happens on full documents
/// before skip/limit carve out the page, and projection narrows fields only
/// after the page is decided. The limit stage is absent entirely when the
/// request asked for an unlimited page.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    stages: Vec<Stage>,
}

impl QueryPlan {
    pub(crate) fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The match stage, if the plan carries one
    pub fn match_stage(&self) -> Option<&MatchStage> {
        self.stages.iter().find_map(|s| match s {
            Stage::Match(m) => Some(m),
            _ => None,
        })
    }

    /// The sort specification, if the plan carries one
    pub fn sort(&self) -> Option<&SortSpec> {
        self.stages.iter().find_map(|s| match s {
            Stage::Sort(spec) => Some(spec),
            _ => None,
        })
    }

    /// Number of matched rows skipped before the page
    pub fn skip(&self) -> Option<u64> {
        self.stages.iter().find_map(|s| match s {
            Stage::Skip(n) => Some(*n),
            _ => None,
        })
    }

    /// The projection stage, if the plan carries one
    pub fn projection(&self) -> Option<&Projection> {
        self.stages.iter().find_map(|s| match s {
            Stage::Project(p) => Some(p),
            _ => None,
        })
    }

    /// Page cap; `None` when the plan is unbounded
    pub fn limit(&self) -> Option<u64> {
        self.stages.iter().find_map(|s| match s {
            Stage::Limit(n) => Some(*n),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_match_stage() {
        assert!(MatchStage::default().is_empty());

        let with_global = MatchStage {
            global: vec![GlobalClause {
                term: "smith".to_string(),
                columns: vec!["name".to_string()],
            }],
            fields: BTreeMap::new(),
        };
        assert!(!with_global.is_empty());
    }

    #[test]
    fn test_sort_spec_constructors() {
        let asc = SortSpec::asc("name");
        assert_eq!(asc.field, "name");
        assert_eq!(asc.direction, SortDirection::Asc);

        let desc = SortSpec::desc("age");
        assert_eq!(desc.direction, SortDirection::Desc);
    }

    #[test]
    fn test_plan_accessors() {
        let plan = QueryPlan::new(vec![
            Stage::Match(MatchStage::default()),
            Stage::Sort(SortSpec::asc("name")),
            Stage::Skip(20),
            Stage::Project(Projection {
                columns: vec!["name".to_string()],
            }),
            Stage::Limit(10),
        ]);

        assert!(plan.match_stage().is_some());
        assert_eq!(plan.sort().map(|s| s.field.as_str()), Some("name"));
        assert_eq!(plan.skip(), Some(20));
        assert_eq!(plan.limit(), Some(10));
    }

    #[test]
    fn test_unbounded_plan_has_no_limit() {
        let plan = QueryPlan::new(vec![
            Stage::Match(MatchStage::default()),
            Stage::Skip(0),
        ]);
        assert_eq!(plan.limit(), None);
    }

    #[test]
    fn test_field_constraint_variants() {
        let contains = FieldConstraint::Contains("ann".to_string());
        let filter = FieldConstraint::Filter(FilterCondition::eq(json!("acme")));
        assert_ne!(contains, filter);
    }
}
