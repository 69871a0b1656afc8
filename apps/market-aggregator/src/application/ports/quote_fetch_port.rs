//! Quote Fetch Port (Driven Port)
//!
//! Interface for fetching one quote from the upstream price API.

use async_trait::async_trait;

use crate::domain::RawQuote;

/// Quote fetch error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuoteFetchError {
    /// The upstream API answered with an error status.
    #[error("FMP API error: {body}")]
    Upstream {
        /// Upstream response body text.
        body: String,
    },

    /// The upstream API did not answer within the fetch timeout.
    #[error("upstream quote request timed out")]
    Timeout,

    /// The request never completed.
    #[error("quote fetch connection error: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// The response could not be decoded into a quote.
    #[error("quote response decode error: {message}")]
    Decode {
        /// Error details.
        message: String,
    },
}

/// Port for fetching quotes from the upstream API.
///
/// One fetch per call, bounded by the adapter's fixed timeout; no retries.
#[async_trait]
pub trait QuoteFetchPort: Send + Sync {
    /// Fetch the latest quote for `symbol`.
    ///
    /// `symbol` is non-blank by the time it reaches the port. If the
    /// upstream returns several entries, only the first is consumed.
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote, QuoteFetchError>;
}
