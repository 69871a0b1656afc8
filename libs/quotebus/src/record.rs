//! Canonical market quote wire record.

use serde::{Deserialize, Serialize};

/// Topic that canonical quote records are published to.
pub const MARKET_QUOTES_TOPIC: &str = "market-quotes";

/// The canonical quote record published to the bus.
///
/// The schema is fixed-shape: all 22 fields are present in every encoded
/// record, with `None` as the explicit absent marker. The aggregator
/// populates only `symbol` and `price`; the remaining fields exist so the
/// wire schema does not change when richer upstream data is wired through
/// later.
///
/// Build partially-populated records with struct update syntax:
///
/// ```
/// use quotebus::MarketQuote;
///
/// let record = MarketQuote {
///     symbol: "AAPL".to_string(),
///     price: 150.0,
///     ..MarketQuote::default()
/// };
/// assert!(record.name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    /// Instrument symbol, as supplied upstream.
    pub symbol: String,
    /// Last traded price.
    pub price: f64,
    /// Company name.
    pub name: Option<String>,
    /// Percentage change on the day.
    pub changes_percentage: Option<f64>,
    /// Absolute change on the day.
    pub change: Option<f64>,
    /// Day low.
    pub day_low: Option<f64>,
    /// Day high.
    pub day_high: Option<f64>,
    /// 52-week high.
    pub year_high: Option<f64>,
    /// 52-week low.
    pub year_low: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// 50-day moving average price.
    pub price_avg_50: Option<f64>,
    /// 200-day moving average price.
    pub price_avg_200: Option<f64>,
    /// Day volume.
    pub volume: Option<i64>,
    /// Average volume.
    pub avg_volume: Option<i64>,
    /// Listing exchange.
    pub exchange: Option<String>,
    /// Opening price.
    pub open: Option<f64>,
    /// Previous session close.
    pub previous_close: Option<f64>,
    /// Earnings per share.
    pub eps: Option<f64>,
    /// Price/earnings ratio.
    pub pe: Option<f64>,
    /// Next earnings announcement, upstream string form.
    pub earnings_announcement: Option<String>,
    /// Shares outstanding.
    pub shares_outstanding: Option<i64>,
    /// Quote timestamp, unix seconds.
    pub timestamp: Option<i64>,
}
