//! QuoteBus Relay Binary
//!
//! Runs the topic relay the MarketPulse services connect to.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quotebus-relay
//! ```
//!
//! # Environment Variables
//!
//! - `BUS_BIND_ADDR`: Listen address (default: 127.0.0.1:9092)
//! - `RUST_LOG`: Log level (default: info)

use quotebus::Relay;
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:9092";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bind_addr =
        std::env::var("BUS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!(%bind_addr, "Starting QuoteBus relay");
    let relay = Relay::bind(&bind_addr).await?;
    relay.run().await?;
    Ok(())
}
