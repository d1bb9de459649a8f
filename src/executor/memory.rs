//! In-memory reference executor
//!
//! An in-process document collection that runs compiled plans stage by
//! stage, in plan order. It stands in for a real document store in tests
//! and small deployments; the semantics here define what any remote
//! executor implementation must reproduce.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::compiler::{Projection, QueryPlan, Stage};

use super::errors::{ExecutorError, ExecutorResult};
use super::filters::MatchEvaluator;
use super::sorter::sort_rows;
use super::QueryExecutor;

/// Store-assigned unique identifier field
pub const ID_FIELD: &str = "_id";

/// In-process document collection
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor {
    documents: Vec<Value>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing documents, assigning ids as needed
    pub fn from_documents(documents: Vec<Value>) -> ExecutorResult<Self> {
        let mut executor = Self::new();
        for document in documents {
            executor.insert(document)?;
        }
        Ok(executor)
    }

    /// Inserts one document.
    ///
    /// Non-object documents are rejected. A document without an `_id` gets
    /// a store-assigned UUID, matching what a real document store does.
    pub fn insert(&mut self, document: Value) -> ExecutorResult<()> {
        let mut map = match document {
            Value::Object(map) => map,
            other => return Err(ExecutorError::NotAnObject(json_kind(&other))),
        };
        map.entry(ID_FIELD.to_string())
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        self.documents.push(Value::Object(map));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl QueryExecutor for MemoryExecutor {
    type Error = ExecutorError;

    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.documents.len() as u64)
    }

    fn run_pipeline(&self, plan: &QueryPlan) -> Result<Vec<Value>, Self::Error> {
        let mut rows = self.documents.clone();

        for stage in plan.stages() {
            match stage {
                Stage::Match(match_stage) => {
                    let evaluator = MatchEvaluator::new(match_stage)?;
                    rows.retain(|row| evaluator.matches(row));
                }
                Stage::Sort(spec) => sort_rows(&mut rows, spec),
                Stage::Skip(n) => {
                    rows.drain(..(*n as usize).min(rows.len()));
                }
                Stage::Project(projection) => {
                    rows = rows.iter().map(|row| project(row, projection)).collect();
                }
                Stage::Limit(n) => rows.truncate(*n as usize),
            }
        }

        Ok(rows)
    }
}

/// Applies the projection to one row.
///
/// Every projected column is present in the output, defaulting to an empty
/// string when the document lacks the field. The `_id` field is carried
/// through untouched so the normalizer can extract row identity.
fn project(row: &Value, projection: &Projection) -> Value {
    let mut out = Map::new();
    if let Some(id) = row.get(ID_FIELD) {
        out.insert(ID_FIELD.to_string(), id.clone());
    }
    for column in &projection.columns {
        let value = row
            .get(column)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));
        out.insert(column.clone(), value);
    }
    Value::Object(out)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
