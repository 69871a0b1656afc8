//! Raw upstream quote.

/// A quote as consumed from the upstream API.
///
/// Only symbol and price are carried; the value lives for one request and is
/// widened into the canonical record before publishing. The price is passed
/// through exactly as received - any sign or magnitude, zero included.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuote {
    /// Instrument symbol, case as supplied upstream.
    pub symbol: String,
    /// Last traded price.
    pub price: f64,
}
