//! FMP-specific error types.

use thiserror::Error;

use crate::application::ports::QuoteFetchError;

/// Errors from the FMP adapter.
#[derive(Debug, Error, Clone)]
pub enum FmpError {
    /// API returned a non-success status; carries the response body text.
    #[error("FMP API error: {body}")]
    Api {
        /// Upstream response body.
        body: String,
    },

    /// The fetch timeout elapsed before a value arrived.
    #[error("FMP API request timed out")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The API answered with an empty quote array.
    #[error("empty quote response")]
    EmptyResponse,
}

impl From<FmpError> for QuoteFetchError {
    fn from(err: FmpError) -> Self {
        match err {
            FmpError::Api { body } => Self::Upstream { body },
            FmpError::Timeout => Self::Timeout,
            FmpError::Network(message) => Self::Network { message },
            FmpError::JsonParse(message) => Self::Decode { message },
            FmpError::EmptyResponse => Self::Decode {
                message: "empty quote response".to_string(),
            },
        }
    }
}
