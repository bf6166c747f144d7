//! Term query - exact match on a field
//!
//! Term clauses have a fixed wire layout, `{"term": {field: {"value": v}}}`,
//! with `boost` present only when set.

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Exact (non-analyzed) match of `value` in `field`
    pub fn term(field: impl Into<String>, value: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::Term, field).set("value", value)
    }
}
