//! Fuzzy queries - matches within an edit distance
//!
//! The `fuzzy` clause only emits `value` plus the tuning options `boost`,
//! `fuzziness`, `prefix_length` and `max_expansions`. The like-this variants
//! analyze free text and fuzz every resulting term.

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Terms in `field` within the configured edit distance of `value`
    pub fn fuzzy(field: impl Into<String>, value: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::Fuzzy, field).set("value", value)
    }

    /// Fuzzy like-this across several fields (set `fields`) or all fields
    pub fn fuzzy_like_this(like_text: impl Into<FieldValue>) -> QueryBuilder {
        QueryBuilder::new(QueryKind::FuzzyLikeThis).set("like_text", like_text)
    }

    /// Fuzzy like-this on a single field
    pub fn fuzzy_like_this_field(
        field: impl Into<String>,
        like_text: impl Into<FieldValue>,
    ) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::FuzzyLikeThisField, field).set("like_text", like_text)
    }
}

impl QueryBuilder {
    /// Set `fuzziness`
    pub fn fuzziness(self, fuzziness: impl Into<FieldValue>) -> Self {
        self.set("fuzziness", fuzziness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fuzzy_value_only() {
        let query = Query::fuzzy("user", "ki").build().unwrap();
        assert_eq!(
            query.generate().unwrap(),
            json!({ "fuzzy": { "user": { "value": "ki" } } })
        );
    }

    #[test]
    fn test_fuzzy_with_options() {
        let query = Query::fuzzy("user", "ki")
            .boost(1.0)
            .fuzziness(2)
            .set("prefix_length", 0)
            .set("max_expansions", 100)
            .build()
            .unwrap();
        assert_eq!(
            query.generate().unwrap(),
            json!({
                "fuzzy": {
                    "user": {
                        "value": "ki",
                        "boost": 1.0,
                        "fuzziness": 2,
                        "prefix_length": 0,
                        "max_expansions": 100
                    }
                }
            })
        );
    }

    #[test]
    fn test_fuzzy_auto_fuzziness() {
        let query = Query::fuzzy("user", "kimchy")
            .fuzziness("AUTO")
            .build()
            .unwrap();
        assert_eq!(
            query.to_clause().unwrap(),
            json!({ "fuzzy": { "user": { "value": "kimchy", "fuzziness": "AUTO" } } })
        );
    }

    #[test]
    fn test_fuzzy_like_this() {
        let query = Query::fuzzy_like_this("text like this one")
            .set("fields", vec!["name.first", "name.last"])
            .set("max_query_terms", 12)
            .build()
            .unwrap();
        assert_eq!(
            query.generate().unwrap(),
            json!({
                "query": {
                    "fuzzy_like_this": {
                        "fields": ["name.first", "name.last"],
                        "like_text": "text like this one",
                        "max_query_terms": 12
                    }
                }
            })
        );
    }

    #[test]
    fn test_fuzzy_like_this_field() {
        let query = Query::fuzzy_like_this_field("name.first", "text like this one")
            .set("max_query_terms", 12)
            .build()
            .unwrap();
        assert_eq!(
            query.to_clause().unwrap(),
            json!({
                "fuzzy_like_this_field": {
                    "name.first": {
                        "like_text": "text like this one",
                        "max_query_terms": 12
                    }
                }
            })
        );
    }
}
