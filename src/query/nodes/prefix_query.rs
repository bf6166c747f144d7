//! Prefix query - matches terms starting with a prefix
//!
//! # Example
//!
//! ```rust
//! use querygen::query::Query;
//!
//! // {"prefix": {"user": {"value": "ki"}}}
//! let query = Query::prefix("user", "ki").build().unwrap();
//! ```

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Match terms in `field` that start with `prefix`
    pub fn prefix(field: impl Into<String>, prefix: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::Prefix, field).set("value", prefix)
    }
}
