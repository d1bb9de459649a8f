//! Pipeline compilation
//!
//! Pure translation of a validated grid request plus caller filters into a
//! [`QueryPlan`]. No I/O, no shared state: every step is a transform over
//! immutable inputs, so compilation is thread-safe and testable without a
//! live store.

use std::collections::BTreeMap;

use crate::protocol::{GridRequest, PageLength};

use super::errors::{CompileError, CompileResult};
use super::filter::CustomFilter;
use super::stages::{
    FieldConstraint, GlobalClause, MatchStage, Projection, QueryPlan, SortSpec, Stage,
};
use super::terms::{tokenize, SearchTerm};

/// Compiles a grid request and caller filter into an executable plan.
///
/// Stage order in the result is fixed at match → sort → skip → project →
/// limit, with the limit stage omitted for unlimited pages. Reordering
/// would break pagination: sort must see full documents before skip/limit
/// carve the page, and projection narrows fields only afterwards.
pub fn compile(request: &GridRequest, custom_filter: &CustomFilter) -> CompileResult<QueryPlan> {
    if request.columns.is_empty() {
        return Err(CompileError::EmptyColumns);
    }
    let order_field = request
        .columns
        .get(request.order_column_index)
        .ok_or(CompileError::OrderColumnOutOfRange {
            index: request.order_column_index,
            columns: request.columns.len(),
        })?
        .clone();

    let terms = tokenize(&request.search_value);
    let match_stage = build_match_stage(&terms, &request.columns, custom_filter);

    let sort = SortSpec {
        field: order_field,
        direction: request.order_direction,
    };
    let projection = Projection {
        columns: request.columns.clone(),
    };

    let mut stages = vec![
        Stage::Match(match_stage),
        Stage::Sort(sort),
        Stage::Skip(request.page_start),
        Stage::Project(projection),
    ];
    if let PageLength::Limited(cap) = request.page_length {
        stages.push(Stage::Limit(cap));
    }

    Ok(QueryPlan::new(stages))
}

/// Merges the three filter sources into one match stage.
///
/// Precedence order: global-search clauses, then scoped-term constraints,
/// then the caller filter. Field collisions resolve by overwrite, so two
/// scoped terms on the same field keep only the last one, and a caller
/// filter beats a scoped term on the same field. The global clauses are
/// structurally separate and cannot be clobbered by field entries.
fn build_match_stage(
    terms: &[SearchTerm],
    columns: &[String],
    custom_filter: &CustomFilter,
) -> MatchStage {
    let global = terms
        .iter()
        .filter_map(|term| match term {
            SearchTerm::Global(text) => Some(GlobalClause {
                term: text.clone(),
                columns: columns.to_vec(),
            }),
            SearchTerm::Scoped { .. } => None,
        })
        .collect();

    let mut fields = BTreeMap::new();
    for term in terms {
        if let SearchTerm::Scoped { field, text } = term {
            fields.insert(field.clone(), FieldConstraint::Contains(text.clone()));
        }
    }
    for (field, condition) in custom_filter.iter() {
        fields.insert(field.to_string(), FieldConstraint::Filter(condition.clone()));
    }

    MatchStage { global, fields }
}
