//! Environment configuration for the aggregator.

use thiserror::Error;

/// Default HTTP server port.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default bus relay endpoint.
pub const DEFAULT_BUS_ENDPOINT: &str = "127.0.0.1:9092";

/// Default FMP API base URL.
pub const DEFAULT_FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Default FMP API key (FMP's public demo key).
pub const DEFAULT_FMP_API_KEY: &str = "demo";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// An upstream API key, redacted from debug output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The key value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Parsed configuration from environment variables.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// HTTP server port.
    pub http_port: u16,
    /// Bus relay endpoint (`host:port`).
    pub bus_endpoint: String,
    /// FMP API base URL.
    pub fmp_base_url: String,
    /// FMP API key.
    pub fmp_api_key: ApiKey,
}

impl AggregatorConfig {
    /// Load configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = match std::env::var("HTTP_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "HTTP_PORT",
                    value,
                })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let bus_endpoint =
            std::env::var("BUS_ENDPOINT").unwrap_or_else(|_| DEFAULT_BUS_ENDPOINT.to_string());
        let fmp_base_url =
            std::env::var("FMP_BASE_URL").unwrap_or_else(|_| DEFAULT_FMP_BASE_URL.to_string());
        let fmp_api_key = ApiKey::new(
            std::env::var("FMP_API_KEY").unwrap_or_else(|_| DEFAULT_FMP_API_KEY.to_string()),
        );

        Ok(Self {
            http_port,
            bus_endpoint,
            fmp_base_url,
            fmp_api_key,
        })
    }
}
