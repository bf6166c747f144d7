//! Query DSL construction and generation
//!
//! This module builds typed query trees and turns them into the search
//! engine's JSON query DSL:
//! - Full-text queries (match, match_phrase, multi_match, common, query_string)
//! - Term-level queries (term, prefix, fuzzy, ids)
//! - Compound queries (bool, boosting, dis_max, constant_score, filtered, function_score)
//! - Joining queries (nested, has_child, has_parent, indices)
//!
//! # Example
//!
//! ```rust
//! use querygen::query::Query;
//!
//! let query = Query::bool_query()
//!     .must(&Query::match_query("content", "rust programming").build().unwrap())
//!     .must_not(&Query::term("status", "draft").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let body = query.generate().unwrap();
//! assert!(body["query"]["bool"]["must"].is_array());
//! ```

pub mod generator;
pub mod kind;
pub mod node;
mod nodes;
pub mod value;

pub use generator::Generator;
pub use kind::{QueryKind, Shape};
pub use node::{Query, QueryBuilder};
pub use value::{FieldValue, MatchOperator, MinimumShouldMatch};
