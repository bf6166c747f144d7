//! Integration tests for query generation
//!
//! Builds realistic request bodies end to end and compares them against the
//! JSON the search engine expects.

use querygen::{Generator, GeneratorConfig, MatchOperator, MinimumShouldMatch, Query};
use serde_json::json;

#[test]
fn test_match_query_golden() {
    let query = Query::match_query("message", "this is a test")
        .analyzer("standard")
        .build()
        .unwrap();

    assert_eq!(
        query.generate().unwrap(),
        json!({
            "query": {
                "match": {
                    "message": { "query": "this is a test", "analyzer": "standard" }
                }
            }
        })
    );
}

#[test]
fn test_term_query_golden() {
    let query = Query::term("user", "kimchy").build().unwrap();
    assert_eq!(
        query.generate().unwrap(),
        json!({ "term": { "user": { "value": "kimchy" } } })
    );
}

#[test]
fn test_match_all_golden() {
    let query = Query::match_all("message").build().unwrap();
    let body = query.generate().unwrap();
    assert_eq!(body["query"]["match"]["message"]["query"], json!(""));
    assert_eq!(body["query"]["match"]["message"]["zero_terms_query"], json!("all"));
}

#[test]
fn test_search_page_request() {
    // A typical search page: full-text on the title, boosted recent posts,
    // drafts excluded
    let title = Query::match_query("title", "rust async runtime")
        .operator(MatchOperator::And)
        .build()
        .unwrap();
    let body = Query::multi_match(vec!["body", "summary^2"], "rust async runtime")
        .set("type", "most_fields")
        .build()
        .unwrap();
    let drafts = Query::term("status", "draft").build().unwrap();

    let relevance = Query::bool_query()
        .should(&title)
        .should(&body)
        .minimum_should_match(MinimumShouldMatch::Count(1))
        .must_not(&drafts)
        .build()
        .unwrap();

    let query = Query::function_score()
        .query(&relevance)
        .function(&Query::field_value_factor("likes", 1.5).set("modifier", "log1p").build().unwrap())
        .set("boost_mode", "sum")
        .build()
        .unwrap();

    assert_eq!(
        query.generate().unwrap(),
        json!({
            "query": {
                "function_score": {
                    "query": {
                        "bool": {
                            "should": [
                                {
                                    "match": {
                                        "title": { "query": "rust async runtime", "operator": "and" }
                                    }
                                },
                                {
                                    "multi_match": {
                                        "fields": ["body", "summary^2"],
                                        "query": "rust async runtime",
                                        "type": "most_fields"
                                    }
                                }
                            ],
                            "minimum_should_match": 1,
                            "must_not": [
                                { "term": { "status": { "value": "draft" } } }
                            ]
                        }
                    },
                    "functions": [
                        {
                            "field_value_factor": {
                                "field": "likes",
                                "factor": 1.5,
                                "modifier": "log1p"
                            }
                        }
                    ],
                    "boost_mode": "sum"
                }
            }
        })
    );
}

#[test]
fn test_irregular_clauses_inside_bool() {
    let query = Query::bool_query()
        .should(&Query::prefix("tags", "tut").build().unwrap())
        .should(&Query::fuzzy("author", "jonh").fuzziness(1).build().unwrap())
        .should(
            &Query::more_like_this_field("body", "rust ownership")
                .set("min_term_freq", 1)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert_eq!(
        query.to_clause().unwrap(),
        json!({
            "bool": {
                "should": [
                    { "prefix": { "tags": { "value": "tut" } } },
                    { "fuzzy": { "author": { "value": "jonh", "fuzziness": 1 } } },
                    { "more_like_this_field": { "body": { "min_term_freq": 1 } } }
                ]
            }
        })
    );
}

#[test]
fn test_reassignment_before_generation() {
    let query = Query::match_query("message", "first").build().unwrap();
    let before = query.generate().unwrap();

    query.set("query", "second").unwrap();
    query.set("operator", MatchOperator::Or).unwrap();
    let after = query.generate().unwrap();

    assert_eq!(before["query"]["match"]["message"]["query"], json!("first"));
    assert_eq!(after["query"]["match"]["message"]["query"], json!("second"));
    assert_eq!(after["query"]["match"]["message"]["operator"], json!("or"));
}

#[test]
fn test_mutating_shared_child_is_visible_in_parent() {
    let child = Query::term("user", "kimchy").build().unwrap();
    let parent = Query::constant_score().filter(&child).build().unwrap();

    child.set("boost", 3.0).unwrap();
    assert_eq!(
        parent.to_clause().unwrap(),
        json!({
            "constant_score": {
                "filter": { "term": { "user": { "value": "kimchy", "boost": 3.0 } } }
            }
        })
    );
}

#[test]
fn test_generator_without_root_wrapper() {
    let generator = Generator::new(GeneratorConfig::default().with_wrap_root(false));
    let query = Query::match_query("message", "test").build().unwrap();
    assert_eq!(
        generator.generate(&query).unwrap(),
        json!({ "match": { "message": { "query": "test" } } })
    );
    assert_eq!(generator.generate(&query).unwrap(), query.to_clause().unwrap());
}

#[test]
fn test_json_string_rendering() {
    let query = Query::term("user", "kimchy").build().unwrap();
    assert_eq!(
        query.to_json_string().unwrap(),
        r#"{"term":{"user":{"value":"kimchy"}}}"#
    );

    let pretty = query.to_json_string_pretty().unwrap();
    assert!(pretty.contains('\n'));
    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, query.generate().unwrap());
}
