//! Raw quote to canonical record mapping.

use quotebus::MarketQuote;

use super::quote::RawQuote;

/// Widen a raw quote into the canonical wire record.
///
/// Pure and infallible. Symbol and price are copied verbatim - no rounding,
/// no sign checks. Every other schema field stays at the absent marker: the
/// upstream API does expose the richer fields (52-week range, market cap,
/// volume, ...) but they are deliberately not wired through yet, and the
/// record keeps its fixed 22-field shape regardless.
pub fn normalize(raw: &RawQuote) -> MarketQuote {
    MarketQuote {
        symbol: raw.symbol.clone(),
        price: raw.price,
        ..MarketQuote::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populates_only_symbol_and_price() {
        let record = normalize(&RawQuote {
            symbol: "AAPL".to_string(),
            price: 150.0,
        });

        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.price, 150.0);
        assert_eq!(record, MarketQuote {
            symbol: "AAPL".to_string(),
            price: 150.0,
            ..MarketQuote::default()
        });
        assert!(record.name.is_none());
        assert!(record.changes_percentage.is_none());
        assert!(record.change.is_none());
        assert!(record.day_low.is_none());
        assert!(record.day_high.is_none());
        assert!(record.year_high.is_none());
        assert!(record.year_low.is_none());
        assert!(record.market_cap.is_none());
        assert!(record.price_avg_50.is_none());
        assert!(record.price_avg_200.is_none());
        assert!(record.volume.is_none());
        assert!(record.avg_volume.is_none());
        assert!(record.exchange.is_none());
        assert!(record.open.is_none());
        assert!(record.previous_close.is_none());
        assert!(record.eps.is_none());
        assert!(record.pe.is_none());
        assert!(record.earnings_announcement.is_none());
        assert!(record.shares_outstanding.is_none());
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn price_passes_through_unmodified() {
        for price in [0.0, -10.0, 0.000_1, 1.0e9] {
            let record = normalize(&RawQuote {
                symbol: "X".to_string(),
                price,
            });
            assert_eq!(record.price, price);
        }
    }

    #[test]
    fn symbol_case_is_preserved() {
        let record = normalize(&RawQuote {
            symbol: "brk.b".to_string(),
            price: 1.0,
        });
        assert_eq!(record.symbol, "brk.b");
    }
}
