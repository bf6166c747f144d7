use serde::{Deserialize, Serialize};

/// Default recursion ceiling for a single generate call
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for JSON generation
///
/// Serializable so that hosts can embed it in their own configuration files:
///
/// ```toml
/// [query_generator]
/// max_depth = 32
/// wrap_root = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum nesting of query nodes before generation fails
    ///
    /// The root counts as one level, so `0` makes every generate call fail with
    /// [`DepthLimitExceeded`](crate::QueryError::DepthLimitExceeded).
    pub max_depth: usize,
    /// Wrap root clauses of generic-shaped queries under a `"query"` key
    pub wrap_root: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            wrap_root: true,
        }
    }
}

impl GeneratorConfig {
    /// Set the maximum nesting depth; see [`max_depth`](Self::max_depth)
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable the root `"query"` wrapper
    pub fn with_wrap_root(mut self, wrap_root: bool) -> Self {
        self.wrap_root = wrap_root;
        self
    }
}
