//! Consuming service for canonical quote records.

use quotebus::{BusConsumer, BusError, MARKET_QUOTES_TOPIC, MarketQuote};

use crate::config::StorageConfig;

/// Subscribes to the quotes topic and drains records.
pub struct QuoteStorageService {
    consumer: BusConsumer,
}

impl QuoteStorageService {
    /// Connect to the relay and join the configured consumer group.
    pub async fn connect(config: &StorageConfig) -> Result<Self, BusError> {
        let consumer = BusConsumer::subscribe(
            &config.bus_endpoint,
            MARKET_QUOTES_TOPIC,
            &config.consumer_group,
        )
        .await?;
        tracing::info!(
            bus_endpoint = %config.bus_endpoint,
            consumer_group = %config.consumer_group,
            "Subscribed to market quotes"
        );
        Ok(Self { consumer })
    }

    /// Receive and process one record.
    ///
    /// Returns the decoded record, or `Ok(None)` when the relay closes the
    /// connection. Undecodable payloads are logged and skipped.
    pub async fn poll_next(&mut self) -> Result<Option<MarketQuote>, BusError> {
        while let Some(delivery) = self.consumer.next_record().await? {
            match delivery.decode::<MarketQuote>() {
                Ok(quote) => {
                    tracing::info!(key = %delivery.key, record = ?quote, "Consumed market quote");
                    // TODO: Persist to Postgres
                    return Ok(Some(quote));
                }
                Err(err) => {
                    tracing::warn!(key = %delivery.key, error = %err, "Skipping undecodable record");
                }
            }
        }
        Ok(None)
    }

    /// Drain records until the connection closes.
    pub async fn run(mut self) -> Result<(), BusError> {
        while self.poll_next().await?.is_some() {}
        tracing::info!("Bus connection closed, stopping");
        Ok(())
    }
}
