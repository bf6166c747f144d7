//! Query nodes and their builder
//!
//! A [`Query`] is a reference-counted handle to a node's state, so a clause can
//! be embedded in several parents without copying. Field values can be
//! reassigned after construction, but only fields declared by the node's kind
//! are accepted.

use parking_lot::{RwLock, RwLockReadGuard};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::generator::Generator;
use super::kind::QueryKind;
use super::value::FieldValue;
use crate::error::QueryError;
use crate::Result;

/// State behind a query handle
#[derive(Debug)]
pub(crate) struct QueryState {
    pub(crate) kind: QueryKind,
    /// Document field the clause targets; not a declared field, never walked
    pub(crate) field: Option<String>,
    pub(crate) values: BTreeMap<&'static str, FieldValue>,
}

impl QueryState {
    pub(crate) fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }
}

/// Shared handle to a query node
#[derive(Clone)]
pub struct Query {
    inner: Arc<RwLock<QueryState>>,
}

impl Query {
    /// Kind of this node
    pub fn kind(&self) -> QueryKind {
        self.read().kind
    }

    /// Document field this clause is keyed by, for primary-field kinds
    pub fn field(&self) -> Option<String> {
        self.read().field.clone()
    }

    /// Current value of a declared field
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.read().values.get(name).cloned()
    }

    /// Whether a declared field currently holds a value
    pub fn is_set(&self, name: &str) -> bool {
        self.read().values.contains_key(name)
    }

    /// Names of the fields currently holding values
    pub fn set_fields(&self) -> Vec<&'static str> {
        self.read().values.keys().copied().collect()
    }

    /// Reassign a declared field
    pub fn set(&self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let mut state = self.inner.write();
        let field = declared_field(state.kind, name)?;
        state.values.insert(field, value.into());
        Ok(())
    }

    /// Clear a declared optional field, returning its previous value
    ///
    /// Fails without changing the node if the field is required, or if clearing it
    /// would leave the node in a state [`QueryBuilder::build`] rejects.
    pub fn unset(&self, name: &str) -> Result<Option<FieldValue>> {
        let mut state = self.inner.write();
        let field = declared_field(state.kind, name)?;
        if state.kind.required().contains(&field) {
            return Err(QueryError::InvalidQuery(format!(
                "cannot unset required field '{}' of {} query",
                field, state.kind
            )));
        }
        let previous = state.values.remove(field);
        if let Err(err) = validate(state.kind, &state.values) {
            if let Some(value) = previous {
                state.values.insert(field, value);
            }
            return Err(err);
        }
        Ok(previous)
    }

    /// Whether two handles point at the same node
    pub fn ptr_eq(&self, other: &Query) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Generate the root request JSON with default settings
    ///
    /// Generic and primary-field clauses are wrapped as `{"query": clause}`.
    pub fn generate(&self) -> Result<Value> {
        Generator::default().generate(self)
    }

    /// Generate the clause as it appears when embedded in another query
    pub fn to_clause(&self) -> Result<Value> {
        Generator::default().clause(self)
    }

    /// Render the root request JSON as a compact string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.generate()?)?)
    }

    /// Render the root request JSON as an indented string
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.generate()?)?)
    }

    /// Identity of the underlying node, stable for the node's lifetime
    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    // Recursive so that a shared subtree can be read while an ancestor guard is held.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, QueryState> {
        self.inner.read_recursive()
    }
}

impl fmt::Debug for Query {
    // Children are not followed, so cyclic trees print fine.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Query")
            .field("kind", &state.kind)
            .field("field", &state.field)
            .field("set", &state.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn declared_field(kind: QueryKind, name: &str) -> Result<&'static str> {
    kind.declared(name).ok_or_else(|| QueryError::UnknownField {
        kind,
        field: name.to_string(),
    })
}

/// Builder collecting a node's field values before validation
///
/// Created by the per-kind constructors on [`Query`], e.g.
/// [`Query::match_query`] or [`Query::bool_query`].
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    kind: QueryKind,
    field: Option<String>,
    values: BTreeMap<String, FieldValue>,
}

impl QueryBuilder {
    /// Create an empty builder for a kind
    pub fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            field: None,
            values: BTreeMap::new(),
        }
    }

    /// Create a builder keyed by a document field
    pub fn for_field(kind: QueryKind, field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::new(kind)
        }
    }

    /// Kind being built
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Set a field by its wire name; unknown names are reported by [`build`](Self::build)
    pub fn set(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a field only when a value is given
    pub fn set_opt<V: Into<FieldValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Append to a list field, turning a single value into a list
    pub fn push(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let value = value.into();
        let slot = self
            .values
            .entry(name.into())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match slot {
            FieldValue::List(items) => items.push(value),
            single => {
                let first = std::mem::replace(single, FieldValue::List(Vec::new()));
                *single = FieldValue::List(vec![first, value]);
            }
        }
        self
    }

    /// Set `boost`
    pub fn boost(self, boost: f64) -> Self {
        self.set("boost", boost)
    }

    /// Set `query` to a nested clause
    pub fn query(self, query: impl Into<FieldValue>) -> Self {
        self.set("query", query)
    }

    /// Set `filter` to a nested clause
    pub fn filter(self, filter: impl Into<FieldValue>) -> Self {
        self.set("filter", filter)
    }

    /// Validate the collected values and produce the node
    pub fn build(self) -> Result<Query> {
        let kind = self.kind;

        if kind.shape().has_primary_field() {
            match self.field.as_deref() {
                Some(field) if !field.is_empty() => {}
                _ => {
                    return Err(QueryError::MissingField {
                        kind,
                        field: "field".to_string(),
                    })
                }
            }
        }

        let mut values = BTreeMap::new();
        for (name, value) in self.values {
            values.insert(declared_field(kind, &name)?, value);
        }

        for (name, value) in kind.forced_values() {
            values.insert(*name, FieldValue::from(*value));
        }

        for name in kind.required() {
            if !values.contains_key(name) {
                return Err(QueryError::MissingField {
                    kind,
                    field: name.to_string(),
                });
            }
        }

        validate(kind, &values)?;

        Ok(Query {
            inner: Arc::new(RwLock::new(QueryState {
                kind,
                field: self.field,
                values,
            })),
        })
    }
}

/// Cross-field constraints that the required list cannot express
fn validate(kind: QueryKind, values: &BTreeMap<&'static str, FieldValue>) -> Result<()> {
    match kind {
        QueryKind::Indices if !values.contains_key("index") && !values.contains_key("indices") => {
            Err(QueryError::InvalidQuery(
                "indices query requires either 'index' or 'indices'".to_string(),
            ))
        }
        QueryKind::ConstantScore
            if !values.contains_key("filter") && !values.contains_key("query") =>
        {
            Err(QueryError::InvalidQuery(
                "constant_score query requires either 'filter' or 'query'".to_string(),
            ))
        }
        _ => Ok(()),
    }
}
