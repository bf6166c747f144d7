pub mod config;
pub mod error;
pub mod query;

pub use config::GeneratorConfig;
pub use error::{QueryError, Result};
pub use query::{
    FieldValue, Generator, MatchOperator, MinimumShouldMatch, Query, QueryBuilder, QueryKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
