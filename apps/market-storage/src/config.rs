//! Environment configuration for the storage service.

/// Default bus relay endpoint.
pub const DEFAULT_BUS_ENDPOINT: &str = "127.0.0.1:9092";

/// Default consumer group id.
pub const DEFAULT_CONSUMER_GROUP: &str = "market-quote-storage-group";

/// Parsed configuration from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bus relay endpoint (`host:port`).
    pub bus_endpoint: String,
    /// Consumer group the service joins.
    pub consumer_group: String,
}

impl StorageConfig {
    /// Load configuration from environment variables, applying defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bus_endpoint: std::env::var("BUS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_BUS_ENDPOINT.to_string()),
            consumer_group: std::env::var("CONSUMER_GROUP")
                .unwrap_or_else(|_| DEFAULT_CONSUMER_GROUP.to_string()),
        }
    }
}
