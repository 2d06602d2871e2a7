//! Daily OHLCV bar.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One daily trading summary for a symbol.
///
/// Built from the providers' wire payloads in `provider/`; never crosses a
/// serialization boundary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}
