//! Ids and indices queries

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Documents with the given ids, optionally restricted by `type`
    pub fn ids(values: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::Ids).set("values", values)
    }

    /// Run `query` on some indices and `no_match_query` on the rest
    ///
    /// Building fails unless `index` or `indices` is set.
    pub fn indices(query: &Query) -> QueryBuilder {
        QueryBuilder::new(QueryKind::Indices).query(query)
    }
}
