//! FMP adapter configuration.

use std::time::Duration;

use crate::config::ApiKey;

/// Timeout applied to every upstream fetch, measured from dispatch.
pub const FMP_TIMEOUT: Duration = Duration::from_secs(3);

/// Configuration for the FMP quote adapter.
#[derive(Debug, Clone)]
pub struct FmpConfig {
    /// API base URL.
    pub base_url: String,
    /// API key, injected as the `apikey` query parameter.
    pub api_key: ApiKey,
    /// Request timeout.
    pub timeout: Duration,
}

impl FmpConfig {
    /// Create a new configuration with the fixed default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: FMP_TIMEOUT,
        }
    }

    /// Override the timeout (tests).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
