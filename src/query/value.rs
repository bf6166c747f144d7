//! Field values held by query nodes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::Query;

/// Value stored in a declared field of a query node
#[derive(Clone, Debug)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    /// Must be finite to be generated
    Float(f64),
    Text(String),
    /// Raw JSON passed through untouched (script params, document lists, ...)
    ///
    /// Never inspected during generation: nested arrays such as geo coordinate
    /// pairs are emitted as given, unlike a [`FieldValue::List`] inside a list.
    Json(Value),
    /// A nested query clause
    Node(Query),
    /// An ordered list of clauses or scalars; lists may not nest directly
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Get the child node if this value is one
    pub fn as_node(&self) -> Option<&Query> {
        match self {
            FieldValue::Node(query) => Some(query),
            _ => None,
        }
    }

    /// Get the text if this value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this value carries query nodes (directly or in a list)
    pub fn has_nodes(&self) -> bool {
        match self {
            FieldValue::Node(_) => true,
            FieldValue::List(items) => items.iter().any(FieldValue::has_nodes),
            _ => false,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Json(Value::from(value))
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Json(Value::from(value))
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Json(value)
    }
}

impl From<Query> for FieldValue {
    fn from(value: Query) -> Self {
        FieldValue::Node(value)
    }
}

impl From<&Query> for FieldValue {
    fn from(value: &Query) -> Self {
        FieldValue::Node(value.clone())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue> + Clone> From<&[T]> for FieldValue {
    fn from(values: &[T]) -> Self {
        FieldValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Operator for combining terms in a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOperator {
    /// All terms must match
    And,
    /// At least one term must match
    #[default]
    Or,
}

impl MatchOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

impl From<MatchOperator> for FieldValue {
    fn from(operator: MatchOperator) -> Self {
        FieldValue::Text(operator.as_str().to_string())
    }
}

/// Minimum should match specification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Absolute count, sent as a number
    Count(i64),
    /// Percentage or combination expression, e.g. "75%" or "3<90%"
    Percentage(String),
}

impl From<MinimumShouldMatch> for FieldValue {
    fn from(msm: MinimumShouldMatch) -> Self {
        match msm {
            MinimumShouldMatch::Count(n) => FieldValue::Int(n),
            MinimumShouldMatch::Percentage(p) => FieldValue::Text(p),
        }
    }
}
