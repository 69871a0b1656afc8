// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Market Aggregator - Quote Ingestion Service
//!
//! Ingests one external stock quote per request and republishes it onto the
//! bus in the fixed canonical schema.
//!
//! # Architecture (Hexagonal)
//!
//! - **Domain**: `RawQuote` and the normalizer that widens it into the
//!   canonical record with every unpopulated field explicitly absent.
//! - **Application**: the `QuoteFetchPort`/`QuotePublisherPort` interfaces
//!   and the one-shot get-quote use case
//!   (validate → fetch → normalize → publish → respond).
//! - **Infrastructure**: the FMP HTTP adapter (reqwest, 3s timeout), the bus
//!   publisher adapter (quotebus producer, `market-quotes` topic keyed by
//!   symbol), and the axum REST controller.
//!
//! The publish hand-off is fire-and-forget: the HTTP response never waits on
//! broker acknowledgment, and publish failures surface only in the logs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - quote types and the canonical-record normalizer.
pub mod domain;

/// Application layer - ports and the get-quote use case.
pub mod application;

/// Infrastructure layer - FMP, bus, and HTTP adapters.
pub mod infrastructure;

/// Environment configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

pub use config::{AggregatorConfig, ApiKey, ConfigError};
