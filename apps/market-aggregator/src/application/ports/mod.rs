//! Application ports (driven).
//!
//! The pipeline talks to the upstream quote API and the message bus through
//! these interfaces; the concrete adapters live in `infrastructure`.

mod quote_fetch_port;
mod quote_publisher_port;

pub use quote_fetch_port::{QuoteFetchError, QuoteFetchPort};
pub use quote_publisher_port::{NoOpQuotePublisher, QuotePublishError, QuotePublisherPort};
