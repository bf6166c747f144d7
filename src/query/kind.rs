//! Query variant catalog
//!
//! Every supported query kind is a variant of the closed [`QueryKind`] enum.
//! A kind fixes three things:
//! - the wire tag the generated clause is keyed under
//! - the ordered list of declared fields the generic walk may emit
//! - the [`Shape`] strategy used to lay those fields out

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout strategy for a generated clause
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `{tag: {name: value, ...}}`
    Generic,
    /// `{tag: {field: {name: value, ...}}}`
    PrimaryField,
    /// Primary field layout with `query` and `zero_terms_query` pinned
    MatchAll,
    /// `{tag: {field: {"value": v, "boost": b}}}`
    TermLike,
    /// `{tag: {field: {"value": v, ...}}}` restricted to [`FUZZY_OPTIONS`]
    Fuzzy,
    /// Primary field layout over the declared fields after `like_text` and `fields`
    MoreLikeThisField,
}

impl Shape {
    /// Whether the clause is keyed by a document field name
    pub fn has_primary_field(self) -> bool {
        !matches!(self, Shape::Generic)
    }

    /// Whether a root clause of this shape is wrapped under `"query"`
    ///
    /// Term-like, fuzzy and more-like-this-field clauses are always emitted bare.
    pub fn wraps_at_root(self) -> bool {
        matches!(self, Shape::Generic | Shape::PrimaryField | Shape::MatchAll)
    }
}

/// Optional fields emitted by the fuzzy layout next to `value`
pub const FUZZY_OPTIONS: &[&str] = &["boost", "fuzziness", "prefix_length", "max_expansions"];

const MATCH_FIELDS: &[&str] = &[
    "query",
    "operator",
    "minimum_should_match",
    "analyzer",
    "fuzziness",
    "prefix_length",
    "max_expansions",
    "zero_terms_query",
    "cutoff_frequency",
];

const MATCH_PHRASE_FIELDS: &[&str] = &[
    "query",
    "operator",
    "minimum_should_match",
    "analyzer",
    "fuzziness",
    "prefix_length",
    "max_expansions",
    "zero_terms_query",
    "cutoff_frequency",
    "slop",
    "type",
];

const MULTI_MATCH_FIELDS: &[&str] = &[
    "fields",
    "query",
    "type",
    "tie_breaker",
    "analyzer",
    "boost",
    "operator",
    "minimum_should_match",
    "fuzziness",
    "prefix_length",
    "max_expansions",
    "zero_terms_query",
    "rewrite",
    "cutoff_frequency",
];

const BOOL_FIELDS: &[&str] = &[
    "must",
    "must_not",
    "should",
    "minimum_should_match",
    "disable_coord",
    "boost",
];

const BOOSTING_FIELDS: &[&str] = &["positive", "negative", "negative_boost"];

const COMMON_FIELDS: &[&str] = &[
    "query",
    "low_freq_operator",
    "boost",
    "analyzer",
    "disable_coord",
    "minimum_should_match",
    "cutoff_frequency",
];

const CONSTANT_SCORE_FIELDS: &[&str] = &["filter", "query", "boost"];

const TERM_FIELDS: &[&str] = &["value", "boost"];

const DIS_MAX_FIELDS: &[&str] = &["queries", "boost", "tie_breaker"];

const FILTERED_FIELDS: &[&str] = &["query", "filter", "strategy"];

const FUZZY_LIKE_THIS_FIELDS: &[&str] = &[
    "like_text",
    "fields",
    "max_query_terms",
    "ignore_tf",
    "fuzziness",
    "boost",
    "analyzer",
    "prefix_length",
];

const FUZZY_LIKE_THIS_FIELD_FIELDS: &[&str] = &[
    "like_text",
    "max_query_terms",
    "ignore_tf",
    "fuzziness",
    "boost",
    "analyzer",
    "prefix_length",
];

const FUNCTION_SCORE_FIELDS: &[&str] = &[
    "query",
    "filter",
    "boost",
    "functions",
    "boost_mode",
    "max_boost",
    "score_mode",
];

const SCRIPT_SCORE_FIELDS: &[&str] = &["script", "lang", "params"];

const RANDOM_SCORE_FIELDS: &[&str] = &["seed"];

const FIELD_VALUE_FACTOR_FIELDS: &[&str] = &["field", "factor", "modifier"];

const FUZZY_FIELDS: &[&str] = &[
    "value",
    "boost",
    "fuzziness",
    "prefix_length",
    "max_expansions",
];

const HAS_CHILD_FIELDS: &[&str] = &[
    "query",
    "type",
    "score_mode",
    "min_children",
    "max_children",
];

const HAS_PARENT_FIELDS: &[&str] = &["query", "parent_type", "score_mode"];

const IDS_FIELDS: &[&str] = &["type", "values"];

const INDICES_FIELDS: &[&str] = &["query", "indices", "index", "no_match_query"];

// Order matters: the more_like_this_field layout skips the first two entries.
const MORE_LIKE_THIS_FIELDS: &[&str] = &[
    "like_text",
    "fields",
    "min_term_freq",
    "max_query_terms",
    "docs",
    "ids",
    "include",
    "percent_terms_to_match",
    "stop_words",
    "min_doc_freq",
    "max_doc_freq",
    "min_word_length",
    "max_word_length",
    "boost",
    "analyzer",
];

const NESTED_FIELDS: &[&str] = &["path", "score_mode", "query"];

const QUERY_STRING_FIELDS: &[&str] = &[
    "query",
    "default_field",
    "default_operator",
    "tie_breaker",
    "use_dis_max",
    "fields",
    "rewrite",
    "locale",
    "lenient",
    "minimum_should_match",
    "auto_generate_phrase_queries",
    "analyze_wildcard",
    "boost",
    "phrase_slop",
    "fuzzy_prefix_length",
    "fuzziness",
    "fuzzy_max_expansions",
    "enable_position_increments",
    "lowercase_expanded_terms",
    "allow_leading_wildcard",
    "analyzer",
];

/// All supported query kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Match,
    MatchAll,
    MatchPhrase,
    MultiMatch,
    Bool,
    Boosting,
    CommonTerms,
    ConstantScore,
    Term,
    Prefix,
    DisMax,
    Filtered,
    FuzzyLikeThis,
    FuzzyLikeThisField,
    FunctionScore,
    ScriptScore,
    RandomScore,
    FieldValueFactor,
    Fuzzy,
    HasChild,
    HasParent,
    Ids,
    Indices,
    MoreLikeThis,
    MoreLikeThisField,
    Nested,
    QueryString,
}

impl QueryKind {
    /// Every kind in catalog order
    pub const ALL: &'static [QueryKind] = &[
        QueryKind::Match,
        QueryKind::MatchAll,
        QueryKind::MatchPhrase,
        QueryKind::MultiMatch,
        QueryKind::Bool,
        QueryKind::Boosting,
        QueryKind::CommonTerms,
        QueryKind::ConstantScore,
        QueryKind::Term,
        QueryKind::Prefix,
        QueryKind::DisMax,
        QueryKind::Filtered,
        QueryKind::FuzzyLikeThis,
        QueryKind::FuzzyLikeThisField,
        QueryKind::FunctionScore,
        QueryKind::ScriptScore,
        QueryKind::RandomScore,
        QueryKind::FieldValueFactor,
        QueryKind::Fuzzy,
        QueryKind::HasChild,
        QueryKind::HasParent,
        QueryKind::Ids,
        QueryKind::Indices,
        QueryKind::MoreLikeThis,
        QueryKind::MoreLikeThisField,
        QueryKind::Nested,
        QueryKind::QueryString,
    ];

    /// Wire key the clause is nested under
    ///
    /// Several kinds share a tag: match_all and match_phrase are both spelled
    /// as `match` clauses with extra options.
    pub fn tag(self) -> &'static str {
        match self {
            QueryKind::Match | QueryKind::MatchAll | QueryKind::MatchPhrase => "match",
            QueryKind::MultiMatch => "multi_match",
            QueryKind::Bool => "bool",
            QueryKind::Boosting => "boosting",
            QueryKind::CommonTerms => "common",
            QueryKind::ConstantScore => "constant_score",
            QueryKind::Term => "term",
            QueryKind::Prefix => "prefix",
            QueryKind::DisMax => "dis_max",
            QueryKind::Filtered => "filtered",
            QueryKind::FuzzyLikeThis => "fuzzy_like_this",
            QueryKind::FuzzyLikeThisField => "fuzzy_like_this_field",
            QueryKind::FunctionScore => "function_score",
            QueryKind::ScriptScore => "script_score",
            QueryKind::RandomScore => "random_score",
            QueryKind::FieldValueFactor => "field_value_factor",
            QueryKind::Fuzzy => "fuzzy",
            QueryKind::HasChild => "has_child",
            QueryKind::HasParent => "has_parent",
            QueryKind::Ids => "ids",
            QueryKind::Indices => "indices",
            QueryKind::MoreLikeThis => "more_like_this",
            QueryKind::MoreLikeThisField => "more_like_this_field",
            QueryKind::Nested => "nested",
            QueryKind::QueryString => "query_string",
        }
    }

    /// Catalog name, unique per kind (used in error messages and logs)
    pub fn name(self) -> &'static str {
        match self {
            QueryKind::Match => "match",
            QueryKind::MatchAll => "match_all",
            QueryKind::MatchPhrase => "match_phrase",
            QueryKind::CommonTerms => "common_terms",
            other => other.tag(),
        }
    }

    /// Declared fields in declaration order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            QueryKind::Match | QueryKind::MatchAll => MATCH_FIELDS,
            QueryKind::MatchPhrase => MATCH_PHRASE_FIELDS,
            QueryKind::MultiMatch => MULTI_MATCH_FIELDS,
            QueryKind::Bool => BOOL_FIELDS,
            QueryKind::Boosting => BOOSTING_FIELDS,
            QueryKind::CommonTerms => COMMON_FIELDS,
            QueryKind::ConstantScore => CONSTANT_SCORE_FIELDS,
            QueryKind::Term | QueryKind::Prefix => TERM_FIELDS,
            QueryKind::DisMax => DIS_MAX_FIELDS,
            QueryKind::Filtered => FILTERED_FIELDS,
            QueryKind::FuzzyLikeThis => FUZZY_LIKE_THIS_FIELDS,
            QueryKind::FuzzyLikeThisField => FUZZY_LIKE_THIS_FIELD_FIELDS,
            QueryKind::FunctionScore => FUNCTION_SCORE_FIELDS,
            QueryKind::ScriptScore => SCRIPT_SCORE_FIELDS,
            QueryKind::RandomScore => RANDOM_SCORE_FIELDS,
            QueryKind::FieldValueFactor => FIELD_VALUE_FACTOR_FIELDS,
            QueryKind::Fuzzy => FUZZY_FIELDS,
            QueryKind::HasChild => HAS_CHILD_FIELDS,
            QueryKind::HasParent => HAS_PARENT_FIELDS,
            QueryKind::Ids => IDS_FIELDS,
            QueryKind::Indices => INDICES_FIELDS,
            QueryKind::MoreLikeThis | QueryKind::MoreLikeThisField => MORE_LIKE_THIS_FIELDS,
            QueryKind::Nested => NESTED_FIELDS,
            QueryKind::QueryString => QUERY_STRING_FIELDS,
        }
    }

    /// Layout strategy
    pub fn shape(self) -> Shape {
        match self {
            QueryKind::Match
            | QueryKind::MatchPhrase
            | QueryKind::CommonTerms
            | QueryKind::FuzzyLikeThisField => Shape::PrimaryField,
            QueryKind::MatchAll => Shape::MatchAll,
            QueryKind::Term | QueryKind::Prefix => Shape::TermLike,
            QueryKind::Fuzzy => Shape::Fuzzy,
            QueryKind::MoreLikeThisField => Shape::MoreLikeThisField,
            _ => Shape::Generic,
        }
    }

    /// Declared fields that must hold a value once the node is built
    pub fn required(self) -> &'static [&'static str] {
        match self {
            QueryKind::Match
            | QueryKind::MatchAll
            | QueryKind::MatchPhrase
            | QueryKind::CommonTerms
            | QueryKind::QueryString => &["query"],
            QueryKind::MultiMatch => &["fields", "query"],
            QueryKind::Term | QueryKind::Prefix | QueryKind::Fuzzy => &["value"],
            QueryKind::DisMax => &["queries"],
            QueryKind::FuzzyLikeThis
            | QueryKind::FuzzyLikeThisField
            | QueryKind::MoreLikeThis
            | QueryKind::MoreLikeThisField => &["like_text"],
            QueryKind::ScriptScore => &["script"],
            QueryKind::RandomScore => &["seed"],
            QueryKind::FieldValueFactor => &["field", "factor"],
            QueryKind::HasChild => &["query", "type"],
            QueryKind::HasParent => &["query", "parent_type"],
            QueryKind::Ids => &["values"],
            QueryKind::Indices => &["query"],
            QueryKind::Nested => &["query", "path"],
            _ => &[],
        }
    }

    /// Values forced after construction, overriding anything the caller supplied
    pub fn forced_values(self) -> &'static [(&'static str, &'static str)] {
        match self {
            QueryKind::MatchAll => &[("query", ""), ("zero_terms_query", "all")],
            QueryKind::MatchPhrase => &[("type", "phrase")],
            _ => &[],
        }
    }

    /// Resolve a field name against the declared set
    pub fn declared(self, name: &str) -> Option<&'static str> {
        self.fields().iter().copied().find(|field| *field == name)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
