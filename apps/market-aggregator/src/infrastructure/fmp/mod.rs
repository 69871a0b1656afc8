//! FMP (Financial Modeling Prep) Quote API Adapter
//!
//! Implements `QuoteFetchPort` against the FMP REST API:
//! - One `GET /quote/{symbol}?apikey=...` per fetch
//! - Fixed 3-second timeout, no retry
//! - Only the first entry of the response array is consumed

mod api_types;
mod client;
mod config;
mod error;

pub use client::FmpClient;
pub use config::{FMP_TIMEOUT, FmpConfig};
pub use error::FmpError;
