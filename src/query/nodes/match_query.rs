//! Match family - full-text queries keyed by a field
//!
//! # Example
//!
//! ```rust
//! use querygen::query::Query;
//!
//! let query = Query::match_query("message", "this is a test")
//!     .set("analyzer", "standard")
//!     .build()
//!     .unwrap();
//! ```

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::{FieldValue, MatchOperator, MinimumShouldMatch};

impl Query {
    /// Full-text match on a single field
    ///
    /// Generates `{"match": {field: {"query": text, ...}}}`.
    pub fn match_query(field: impl Into<String>, text: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::Match, field).set("query", text)
    }

    /// Match clause that matches every document of a field
    ///
    /// The search text is always empty and `zero_terms_query` is always `"all"`,
    /// whatever the caller sets later.
    pub fn match_all(field: impl Into<String>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::MatchAll, field)
    }

    /// Phrase match: a match clause with `type: "phrase"`
    pub fn match_phrase(field: impl Into<String>, text: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::MatchPhrase, field).set("query", text)
    }

    /// Match across several fields
    pub fn multi_match(fields: impl Into<FieldValue>, text: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::MultiMatch)
            .set("fields", fields)
            .set("query", text)
    }

    /// Common terms query, splitting terms into low and high frequency groups
    pub fn common_terms(field: impl Into<String>, text: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::CommonTerms, field).set("query", text)
    }
}

impl QueryBuilder {
    /// Set `operator`
    pub fn operator(self, operator: MatchOperator) -> Self {
        self.set("operator", operator)
    }

    /// Set `minimum_should_match`
    pub fn minimum_should_match(self, msm: MinimumShouldMatch) -> Self {
        self.set("minimum_should_match", msm)
    }

    /// Set `analyzer`
    pub fn analyzer(self, analyzer: impl Into<String>) -> Self {
        self.set("analyzer", analyzer.into())
    }
}
