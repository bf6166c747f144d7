//! Function score query and its scoring functions

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Rescore documents matched by `query` (or `filter`) with `functions`
    pub fn function_score() -> QueryBuilder {
        QueryBuilder::new(QueryKind::FunctionScore)
    }

    /// Scoring function driven by a script
    pub fn script_score(script: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::ScriptScore).set("script", script)
    }

    /// Scoring function producing reproducible random scores
    pub fn random_score(seed: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::RandomScore).set("seed", seed)
    }

    /// Scoring function using the value of a document field
    pub fn field_value_factor(
        field: impl Into<String>,
        factor: impl Into<FieldValue>,
    ) -> QueryBuilder {
        QueryBuilder::new(QueryKind::FieldValueFactor)
            .set("field", field.into())
            .set("factor", factor)
    }
}

impl QueryBuilder {
    /// Add a scoring function to `functions`
    pub fn function(self, function: &Query) -> Self {
        self.push("functions", function)
    }
}
