//! Compound queries - clauses that wrap other clauses
//!
//! # Example
//!
//! ```json
//! {
//!   "bool": {
//!     "must": [
//!       { "term": { "user": { "value": "kimchy" } } }
//!     ],
//!     "should": [
//!       { "term": { "tag": { "value": "wow" } } },
//!       { "term": { "tag": { "value": "elasticsearch" } } }
//!     ],
//!     "minimum_should_match": 1
//!   }
//! }
//! ```

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};

impl Query {
    /// Boolean combination of `must`, `should` and `must_not` clauses
    pub fn bool_query() -> QueryBuilder {
        QueryBuilder::new(QueryKind::Bool)
    }

    /// Demote documents matching `negative` instead of excluding them
    pub fn boosting() -> QueryBuilder {
        QueryBuilder::new(QueryKind::Boosting)
    }

    /// Disjunction of clauses scored by the best match
    pub fn dis_max(queries: Vec<Query>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::DisMax).set("queries", queries)
    }

    /// Give every document matching a filter (or query) the same score
    pub fn constant_score() -> QueryBuilder {
        QueryBuilder::new(QueryKind::ConstantScore)
    }

    /// Query restricted by a filter
    pub fn filtered() -> QueryBuilder {
        QueryBuilder::new(QueryKind::Filtered)
    }
}

impl QueryBuilder {
    /// Add a `must` clause
    pub fn must(self, query: &Query) -> Self {
        self.push("must", query)
    }

    /// Add a `should` clause
    pub fn should(self, query: &Query) -> Self {
        self.push("should", query)
    }

    /// Add a `must_not` clause
    pub fn must_not(self, query: &Query) -> Self {
        self.push("must_not", query)
    }

    /// Set the `positive` clause of a boosting query
    pub fn positive(self, query: &Query) -> Self {
        self.set("positive", query)
    }

    /// Set the `negative` clause of a boosting query
    pub fn negative(self, query: &Query) -> Self {
        self.set("negative", query)
    }
}
