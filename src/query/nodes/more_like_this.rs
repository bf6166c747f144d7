//! More like this queries - find documents similar to a text
//!
//! The single-field variant shares the multi-field field list but only emits
//! the tuning options: neither `like_text` nor `fields` appear under the field key.

use crate::query::kind::QueryKind;
use crate::query::node::{Query, QueryBuilder};
use crate::query::value::FieldValue;

impl Query {
    /// Documents similar to `like_text` in `fields`
    pub fn more_like_this(
        like_text: impl Into<FieldValue>,
        fields: impl Into<FieldValue>,
    ) -> QueryBuilder {
        QueryBuilder::new(QueryKind::MoreLikeThis)
            .set("like_text", like_text)
            .set("fields", fields)
    }

    /// Documents similar to `like_text` in a single field
    pub fn more_like_this_field(
        field: impl Into<String>,
        like_text: impl Into<FieldValue>,
    ) -> QueryBuilder {
        QueryBuilder::for_field(QueryKind::MoreLikeThisField, field).set("like_text", like_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_more_like_this() {
        let query = Query::more_like_this("text like this one", vec!["name.first", "name.last"])
            .set("min_term_freq", 1)
            .set("max_query_terms", 12)
            .build()
            .unwrap();
        assert_eq!(
            query.generate().unwrap(),
            json!({
                "query": {
                    "more_like_this": {
                        "fields": ["name.first", "name.last"],
                        "like_text": "text like this one",
                        "min_term_freq": 1,
                        "max_query_terms": 12
                    }
                }
            })
        );
    }

    #[test]
    fn test_more_like_this_docs_pass_through() {
        let docs = json!([{ "_index": "test", "_type": "type", "_id": "1" }]);
        let query = Query::more_like_this("", vec!["name.first"])
            .set("docs", docs.clone())
            .build()
            .unwrap();
        assert_eq!(query.to_clause().unwrap()["more_like_this"]["docs"], docs);
    }

    #[test]
    fn test_more_like_this_field_emits_options_only() {
        let query = Query::more_like_this_field("name.first", "text like this one")
            .set("min_term_freq", 1)
            .set("max_query_terms", 12)
            .build()
            .unwrap();
        assert_eq!(
            query.generate().unwrap(),
            json!({
                "more_like_this_field": {
                    "name.first": {
                        "min_term_freq": 1,
                        "max_query_terms": 12
                    }
                }
            })
        );
    }
}
