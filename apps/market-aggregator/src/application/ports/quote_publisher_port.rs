//! Quote Publisher Port (Driven Port)
//!
//! Interface for handing canonical records to the message bus.

use async_trait::async_trait;
use quotebus::MarketQuote;

/// Quote publish error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuotePublishError {
    /// Connection to the bus failed.
    #[error("bus connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// The record could not be encoded.
    #[error("record serialization error: {message}")]
    Serialization {
        /// Error details.
        message: String,
    },

    /// The send itself failed.
    #[error("bus publish failed: {message}")]
    PublishFailed {
        /// Error details.
        message: String,
    },
}

/// Port for publishing canonical quote records.
///
/// Records go to the fixed quotes topic keyed by symbol. Callers on the
/// request path do not await the outcome; failures are observed in logs
/// only.
#[async_trait]
pub trait QuotePublisherPort: Send + Sync {
    /// Publish one canonical record.
    async fn publish_quote(&self, record: MarketQuote) -> Result<(), QuotePublishError>;
}

/// No-op quote publisher for testing.
#[derive(Debug, Clone, Default)]
pub struct NoOpQuotePublisher;

#[async_trait]
impl QuotePublisherPort for NoOpQuotePublisher {
    async fn publish_quote(&self, _record: MarketQuote) -> Result<(), QuotePublishError> {
        Ok(())
    }
}
