//! Market Storage Binary
//!
//! Starts the MarketPulse quote consumer.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin market-storage
//! ```
//!
//! # Environment Variables
//!
//! - `BUS_ENDPOINT`: Bus relay endpoint (default: 127.0.0.1:9092)
//! - `CONSUMER_GROUP`: Consumer group id (default: market-quote-storage-group)
//! - `RUST_LOG`: Log level (default: info)

use market_storage::{QuoteStorageService, StorageConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Starting MarketPulse storage consumer");

    let config = StorageConfig::from_env();
    let service = QuoteStorageService::connect(&config).await?;
    service.run().await?;

    Ok(())
}
