// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]

//! Market Storage - Quote Consumer Service
//!
//! Receives canonical quote records from the `market-quotes` topic under a
//! fixed consumer group. Records arrive at least once, keyed by symbol, in
//! order per key. The current behavior is log-and-discard; writing records
//! to Postgres is not implemented yet.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Environment configuration.
pub mod config;

/// The consuming service.
pub mod consumer;

pub use config::StorageConfig;
pub use consumer::QuoteStorageService;
