//! FMP API response types.

use serde::Deserialize;

/// One entry of the FMP quote response array.
///
/// The API exposes many more fields per entry; only the two consumed ones
/// are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct FmpQuote {
    /// Instrument symbol.
    pub symbol: String,
    /// Last traded price.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"symbol":"AAPL","price":150.0,"name":"Apple Inc.","marketCap":3000000000000}"#;
        let quote: FmpQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 150.0);
    }
}
