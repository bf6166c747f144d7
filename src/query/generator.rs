//! JSON generation for query trees
//!
//! Most kinds go through the generic walk: every declared field that holds a
//! value is emitted under the kind's tag (and under the primary field name for
//! field-keyed kinds). Nested nodes recurse into fully formed clauses, lists
//! recurse element by element, scalars pass through. A handful of kinds with
//! irregular wire formats replace the layout with their own, see [`Shape`].

use serde_json::{Map, Number, Value};
use tracing::{debug, trace};

use super::kind::{QueryKind, Shape, FUZZY_OPTIONS};
use super::node::{Query, QueryState};
use super::value::FieldValue;
use crate::config::GeneratorConfig;
use crate::error::QueryError;
use crate::Result;

/// Turns query trees into DSL JSON
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with the given settings
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the root request JSON for a query
    ///
    /// # Example
    ///
    /// ```json
    /// {
    ///   "query": {
    ///     "match": {
    ///       "message": { "query": "this is a test", "analyzer": "standard" }
    ///     }
    ///   }
    /// }
    /// ```
    pub fn generate(&self, query: &Query) -> Result<Value> {
        let kind = query.kind();
        debug!(kind = %kind, "generating query");

        let clause = self.clause(query)?;
        if self.config.wrap_root && kind.shape().wraps_at_root() {
            let mut root = Map::new();
            root.insert("query".to_string(), clause);
            Ok(Value::Object(root))
        } else {
            Ok(clause)
        }
    }

    /// Generate a query as an embedded clause (never wrapped)
    pub fn clause(&self, query: &Query) -> Result<Value> {
        let mut walk = Walk {
            config: &self.config,
            ancestors: Vec::new(),
        };
        walk.node(query).map_err(|err| {
            debug!(error = %err, "query generation failed");
            err
        })
    }
}

/// State of one generate call: the chain of nodes currently being expanded
struct Walk<'a> {
    config: &'a GeneratorConfig,
    ancestors: Vec<usize>,
}

impl Walk<'_> {
    fn node(&mut self, query: &Query) -> Result<Value> {
        let id = query.id();
        if self.ancestors.contains(&id) {
            return Err(QueryError::CyclicQueryTree { kind: query.kind() });
        }
        if self.ancestors.len() >= self.config.max_depth {
            return Err(QueryError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        self.ancestors.push(id);
        let result = {
            let state = query.read();
            trace!(kind = %state.kind, depth = self.ancestors.len(), "expanding node");
            self.shape(&state)
        };
        self.ancestors.pop();
        result
    }

    fn shape(&mut self, state: &QueryState) -> Result<Value> {
        let kind = state.kind;
        match kind.shape() {
            Shape::Generic => {
                let body = self.fields(state, kind.fields())?;
                Ok(tagged(kind, Value::Object(body)))
            }
            Shape::PrimaryField => {
                let body = self.fields(state, kind.fields())?;
                keyed(state, body)
            }
            Shape::MatchAll => {
                let mut body = self.fields(state, kind.fields())?;
                for (name, value) in kind.forced_values() {
                    body.insert(name.to_string(), Value::String(value.to_string()));
                }
                keyed(state, body)
            }
            Shape::TermLike => {
                let mut body = Map::new();
                body.insert("value".to_string(), self.required(state, "value")?);
                if let Some(boost) = state.value("boost") {
                    body.insert("boost".to_string(), self.value("boost", boost)?);
                }
                keyed(state, body)
            }
            Shape::Fuzzy => {
                let mut body = self.fields(state, FUZZY_OPTIONS)?;
                body.insert("value".to_string(), self.required(state, "value")?);
                keyed(state, body)
            }
            Shape::MoreLikeThisField => {
                let body = self.fields(state, &kind.fields()[2..])?;
                keyed(state, body)
            }
        }
    }

    /// Generic walk over a subset of declared fields, skipping unset ones
    fn fields(&mut self, state: &QueryState, names: &[&'static str]) -> Result<Map<String, Value>> {
        let mut body = Map::new();
        for name in names {
            if let Some(value) = state.value(name) {
                body.insert(name.to_string(), self.value(name, value)?);
            }
        }
        Ok(body)
    }

    fn required(&mut self, state: &QueryState, name: &str) -> Result<Value> {
        let value = state.value(name).ok_or_else(|| QueryError::MissingField {
            kind: state.kind,
            field: name.to_string(),
        })?;
        self.value(name, value)
    }

    fn value(&mut self, field: &str, value: &FieldValue) -> Result<Value> {
        match value {
            FieldValue::Bool(b) => Ok(Value::Bool(*b)),
            FieldValue::Int(i) => Ok(Value::from(*i)),
            FieldValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or_else(|| QueryError::UnsupportedValue {
                    field: field.to_string(),
                    reason: format!("non-finite number {f}"),
                }),
            FieldValue::Text(s) => Ok(Value::String(s.clone())),
            FieldValue::Json(json) => Ok(json.clone()),
            FieldValue::Node(query) => self.node(query),
            FieldValue::List(items) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    if let FieldValue::List(_) = item {
                        return Err(QueryError::UnsupportedValue {
                            field: field.to_string(),
                            reason: "list nested directly inside a list".to_string(),
                        });
                    }
                    array.push(self.value(field, item)?);
                }
                Ok(Value::Array(array))
            }
        }
    }
}

fn tagged(kind: QueryKind, body: Value) -> Value {
    let mut clause = Map::new();
    clause.insert(kind.tag().to_string(), body);
    Value::Object(clause)
}

fn keyed(state: &QueryState, body: Map<String, Value>) -> Result<Value> {
    let field = state
        .field
        .as_deref()
        .ok_or_else(|| QueryError::MissingField {
            kind: state.kind,
            field: "field".to_string(),
        })?;
    let mut inner = Map::new();
    inner.insert(field.to_string(), Value::Object(body));
    Ok(tagged(state.kind, Value::Object(inner)))
}
