//! Joining queries - nested documents and parent/child relations

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};

impl Query {
    /// Run `query` against nested objects under `path`
    pub fn nested(path: impl Into<String>, query: &Query) -> QueryBuilder {
        QueryBuilder::new(QueryKind::Nested)
            .set("path", path.into())
            .query(query)
    }

    /// Match parents whose children of `child_type` match `query`
    pub fn has_child(child_type: impl Into<String>, query: &Query) -> QueryBuilder {
        QueryBuilder::new(QueryKind::HasChild)
            .set("type", child_type.into())
            .query(query)
    }

    /// Match children whose parent of `parent_type` matches `query`
    pub fn has_parent(parent_type: impl Into<String>, query: &Query) -> QueryBuilder {
        QueryBuilder::new(QueryKind::HasParent)
            .set("parent_type", parent_type.into())
            .query(query)
    }
}
