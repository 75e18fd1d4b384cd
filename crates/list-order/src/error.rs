//! Error Types
//!
//! None of these reach the user: persistence failures fall back to the
//! natural order and config failures fall back to defaults.

use thiserror::Error;

/// Failure reading or writing a persisted order
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("malformed stored order for {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure parsing an order configuration blob
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid order config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("key prefix must not be empty")]
    EmptyPrefix,
}
