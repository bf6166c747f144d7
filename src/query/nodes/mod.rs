//! Per-kind constructors
//!
//! Each file adds associated constructors to [`Query`](crate::query::Query)
//! for one family of kinds, plus the typed [`QueryBuilder`](crate::query::QueryBuilder)
//! helpers that family uses.

mod bool_query;
mod function_score;
mod fuzzy_query;
mod ids_query;
mod joining;
mod match_query;
mod more_like_this;
mod prefix_query;
mod query_string;
mod term_query;
