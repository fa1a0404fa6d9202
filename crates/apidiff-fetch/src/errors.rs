//! Fetch errors and their mapping onto `ExError`

use apidiff_core::errors::{ExError, ExErrorKind};
use thiserror::Error;

/// Failure while retrieving or decoding one endpoint's document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP error from {url}: {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The `ExErrorKind` this failure maps to
    pub fn kind(&self) -> ExErrorKind {
        match self {
            FetchError::Client(_) => ExErrorKind::Internal,
            FetchError::InvalidHeader { .. } => ExErrorKind::InvalidConfig,
            FetchError::Transport { .. } | FetchError::Body { .. } => ExErrorKind::Http,
            FetchError::Timeout { .. } => ExErrorKind::Timeout,
            FetchError::Status { .. } => ExErrorKind::HttpStatus,
            FetchError::Decode { .. } => ExErrorKind::Decode,
        }
    }
}

impl From<&FetchError> for ExError {
    fn from(err: &FetchError) -> Self {
        ExError::new(err.kind())
            .with_op("fetch")
            .with_message(err.to_string())
    }
}

impl From<FetchError> for ExError {
    fn from(err: FetchError) -> Self {
        ExError::from(&err)
    }
}
