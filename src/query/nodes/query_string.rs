//! Query string query - Lucene syntax parsed by the engine

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Query parsed by the engine's query string parser
    pub fn query_string(query: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::QueryString).set("query", query)
    }
}
