//! FMP quote client.

use async_trait::async_trait;

use crate::application::ports::{QuoteFetchError, QuoteFetchPort};
use crate::config::ApiKey;
use crate::domain::RawQuote;

use super::api_types::FmpQuote;
use super::config::FmpConfig;
use super::error::FmpError;

/// FMP quote API client.
///
/// Implements `QuoteFetchPort`. Holds one `reqwest::Client`, safe to share
/// across in-flight requests.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl FmpClient {
    /// Create a new client from config.
    pub fn new(config: &FmpConfig) -> Result<Self, FmpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FmpError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the quote array for `symbol` and consume its first entry.
    async fn fetch(&self, symbol: &str) -> Result<FmpQuote, FmpError> {
        let url = format!("{}/quote/{}", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%symbol, %status, body = %body, "FMP API error");
            return Err(FmpError::Api { body });
        }

        let quotes: Vec<FmpQuote> = response.json().await.map_err(map_transport_error)?;

        // The API may return several entries; later ones are ignored.
        quotes.into_iter().next().ok_or(FmpError::EmptyResponse)
    }
}

/// Map a reqwest error to the adapter taxonomy.
///
/// The timeout covers the whole exchange, so it can also fire during body
/// read/decode.
fn map_transport_error(err: reqwest::Error) -> FmpError {
    if err.is_timeout() {
        FmpError::Timeout
    } else if err.is_decode() {
        FmpError::JsonParse(err.to_string())
    } else {
        FmpError::Network(err.to_string())
    }
}

#[async_trait]
impl QuoteFetchPort for FmpClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote, QuoteFetchError> {
        let quote = self.fetch(symbol).await?;
        Ok(RawQuote {
            symbol: quote.symbol,
            price: quote.price,
        })
    }
}
