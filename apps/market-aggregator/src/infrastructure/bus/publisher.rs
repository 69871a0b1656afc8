//! Quote publisher over the bus producer client.

use async_trait::async_trait;
use quotebus::{BusError, BusProducer, MARKET_QUOTES_TOPIC, MarketQuote};

use crate::application::ports::{QuotePublishError, QuotePublisherPort};

/// Publishes canonical records to the `market-quotes` topic, keyed by
/// symbol.
#[derive(Debug)]
pub struct BusQuotePublisher {
    producer: BusProducer,
}

impl BusQuotePublisher {
    /// Connect the underlying producer to the relay at `endpoint`.
    pub async fn connect(endpoint: &str) -> Result<Self, QuotePublishError> {
        let producer =
            BusProducer::connect(endpoint)
                .await
                .map_err(|e| QuotePublishError::Connection {
                    message: e.to_string(),
                })?;
        Ok(Self { producer })
    }
}

#[async_trait]
impl QuotePublisherPort for BusQuotePublisher {
    async fn publish_quote(&self, record: MarketQuote) -> Result<(), QuotePublishError> {
        self.producer
            .send(MARKET_QUOTES_TOPIC, &record.symbol, &record)
            .await
            .map_err(|err| match err {
                BusError::Codec(e) => QuotePublishError::Serialization {
                    message: e.to_string(),
                },
                BusError::Io(e) => QuotePublishError::Connection {
                    message: e.to_string(),
                },
                other => QuotePublishError::PublishFailed {
                    message: other.to_string(),
                },
            })?;
        tracing::info!(record = ?record, "Produced market quote");
        Ok(())
    }
}
