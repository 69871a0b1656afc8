//! Get Quote Use Case
//!
//! One-shot pipeline per request: validate the symbol, fetch the quote from
//! the upstream API, normalize it into the canonical record, hand the record
//! to the bus off the request path, and respond with the fetched fields.

use std::sync::Arc;

use crate::application::ports::{QuoteFetchError, QuoteFetchPort, QuotePublisherPort};
use crate::domain::normalize;

/// The quote fields returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDto {
    /// Instrument symbol as fetched.
    pub symbol: String,
    /// Price as fetched, unmodified.
    pub price: f64,
}

/// Get quote error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GetQuoteError {
    /// The request carried a blank symbol; nothing was fetched or published.
    #[error("Symbol must not be blank")]
    BlankSymbol,

    /// The upstream API reported an error (gateway fault).
    #[error("FMP API error: {body}")]
    Upstream {
        /// Upstream response body text.
        body: String,
    },

    /// The upstream API timed out (server fault).
    #[error("upstream quote request timed out")]
    Timeout,

    /// The fetch failed for another reason (server fault).
    #[error("quote fetch failed: {message}")]
    Fetch {
        /// Error details.
        message: String,
    },
}

impl From<QuoteFetchError> for GetQuoteError {
    fn from(err: QuoteFetchError) -> Self {
        match err {
            QuoteFetchError::Upstream { body } => Self::Upstream { body },
            QuoteFetchError::Timeout => Self::Timeout,
            QuoteFetchError::Network { message } | QuoteFetchError::Decode { message } => {
                Self::Fetch { message }
            }
        }
    }
}

/// Use case for serving one quote request.
pub struct GetQuoteUseCase<F, P>
where
    F: QuoteFetchPort,
    P: QuotePublisherPort,
{
    fetcher: Arc<F>,
    publisher: Arc<P>,
}

impl<F, P> GetQuoteUseCase<F, P>
where
    F: QuoteFetchPort,
    P: QuotePublisherPort + 'static,
{
    /// Create a new use case over the two ports.
    pub fn new(fetcher: Arc<F>, publisher: Arc<P>) -> Self {
        Self { fetcher, publisher }
    }

    /// Execute the pipeline for `symbol`.
    ///
    /// A blank symbol fails before any I/O. A failed fetch fails before any
    /// publish. A successful fetch always responds with the fetched fields;
    /// the publish runs in a spawned task and its outcome never reaches the
    /// caller.
    pub async fn execute(&self, symbol: &str) -> Result<QuoteDto, GetQuoteError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(GetQuoteError::BlankSymbol);
        }
        tracing::info!("Received request for quote");

        let raw = self.fetcher.fetch_quote(symbol).await?;
        tracing::info!(symbol = %raw.symbol, price = raw.price, "Fetched quote");

        let record = normalize(&raw);
        let publisher = Arc::clone(&self.publisher);
        tokio::spawn(async move {
            if let Err(err) = publisher.publish_quote(record).await {
                tracing::error!(error = %err, "Failed to publish market quote");
            }
        });

        Ok(QuoteDto {
            symbol: raw.symbol,
            price: raw.price,
        })
    }
}
