//! Market Aggregator Binary
//!
//! Starts the MarketPulse quote aggregator.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin market-aggregator
//! ```
//!
//! # Environment Variables
//!
//! - `FMP_API_KEY`: FMP API key (default: demo)
//! - `FMP_BASE_URL`: FMP API base URL (default: <https://financialmodelingprep.com/api/v3>)
//! - `BUS_ENDPOINT`: Bus relay endpoint (default: 127.0.0.1:9092)
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use market_aggregator::application::use_cases::GetQuoteUseCase;
use market_aggregator::config::AggregatorConfig;
use market_aggregator::infrastructure::bus::BusQuotePublisher;
use market_aggregator::infrastructure::fmp::{FmpClient, FmpConfig};
use market_aggregator::infrastructure::http::{AppState, create_router};
use market_aggregator::telemetry;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    telemetry::init();

    tracing::info!("Starting MarketPulse aggregator");

    let config = AggregatorConfig::from_env()?;
    log_config(&config);

    let fmp_config = FmpConfig::new(config.fmp_base_url.clone(), config.fmp_api_key.clone());
    let fetcher = Arc::new(FmpClient::new(&fmp_config)?);
    let publisher = Arc::new(BusQuotePublisher::connect(&config.bus_endpoint).await?);
    let get_quote = Arc::new(GetQuoteUseCase::new(fetcher, publisher));

    let state = AppState {
        get_quote,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;
    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /quotes/{{symbol}}");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Aggregator stopped");
    Ok(())
}

/// Load .env file from the current directory, if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Log the parsed configuration.
fn log_config(config: &AggregatorConfig) {
    tracing::info!(
        http_port = config.http_port,
        bus_endpoint = %config.bus_endpoint,
        fmp_base_url = %config.fmp_base_url,
        "Configuration loaded"
    );
}

/// Resolve when a shutdown signal arrives.
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
