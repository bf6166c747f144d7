use thiserror::Error;

use crate::query::QueryKind;

/// Main error type for query construction and generation
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unsupported value for field '{field}': {reason}")]
    UnsupportedValue { field: String, reason: String },

    #[error("Cyclic query tree: {kind} query is reachable from itself")]
    CyclicQueryTree { kind: QueryKind },

    #[error("Query tree exceeds maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Unknown field '{field}' for {kind} query")]
    UnknownField { kind: QueryKind, field: String },

    #[error("Missing required field '{field}' for {kind} query")]
    MissingField { kind: QueryKind, field: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;

impl QueryError {
    /// Check if this error was raised while building or mutating a node,
    /// as opposed to while generating JSON from it
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownField { .. }
                | QueryError::MissingField { .. }
                | QueryError::InvalidQuery(_)
        )
    }
}
