//! Typed errors for the membership library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for lookup table loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while retrieving or parsing the lookup file.
///
/// None of these ever reach a query: the loader folds them into
/// [`TableState::Failed`](crate::TableState::Failed).
#[derive(Debug, Error)]
pub enum LoadError {
    /// Request could not be completed (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// Local file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a lookup file
    #[error("malformed lookup file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Data location could not be resolved
    #[error("invalid data location: {0}")]
    InvalidLocation(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

impl From<url::ParseError> for LoadError {
    fn from(err: url::ParseError) -> Self {
        LoadError::InvalidLocation(err.to_string())
    }
}

/// Errors raised by form-level validation, before anything is hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("an email address is required")]
    EmptyInput,
}
