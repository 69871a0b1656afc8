//! Bus Publisher Adapter
//!
//! Implements `QuotePublisherPort` over the quotebus producer client.

mod publisher;

pub use publisher::BusQuotePublisher;
