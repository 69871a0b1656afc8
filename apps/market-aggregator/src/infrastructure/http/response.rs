//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

/// Successful quote payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Instrument symbol as fetched upstream.
    pub symbol: String,
    /// Price as fetched upstream, unmodified.
    pub price: f64,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}
