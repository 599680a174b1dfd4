// crates/geostring-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading sources or building an index.
///
/// Failing to find a place is never an error: matching always produces a
/// [`MatchResult`](crate::MatchResult) and resolving yields `None` when no
/// token survives. Everything here is a configuration or I/O problem.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A source table is narrower than the columns the index needs.
    #[error("{source_name}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        source_name: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
