use std::path::PathBuf;

use crate::constants::NO_RESULT;

/// Failures of a distance query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("actor not found: {name}")]
    ActorNotFound { name: String },

    #[error("no connection between {from} and {to}")]
    NoPath { from: String, to: String },
}

impl SearchError {
    /// Integer stand-in for both variants on the collapsed external contract.
    pub const SENTINEL: i64 = NO_RESULT;
}

/// Failures while loading a dataset or a config file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {reason}")]
    Config { reason: String },
}
