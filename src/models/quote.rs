//! Ephemeral quote snapshot derived from the two most recent daily bars.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::DailyBar;

/// Latest price, the close before it, and the session volume for a symbol.
///
/// Rebuilt on every refresh; never persisted. When the series has a single
/// bar the previous close equals the last close, which makes the
/// day-over-day change exactly zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub symbol: String,
    pub last: Decimal,
    pub previous_close: Decimal,
    pub volume: Decimal,
    pub session: NaiveDate,
}

impl QuoteSnapshot {
    /// Builds a snapshot from a chronologically ordered bar series.
    ///
    /// Returns `None` when the series is empty.
    pub fn from_bars(symbol: &str, bars: &[DailyBar]) -> Option<Self> {
        let last = bars.last()?;
        let previous_close = if bars.len() > 1 {
            bars[bars.len() - 2].close
        } else {
            last.close
        };

        Some(Self {
            symbol: symbol.to_string(),
            last: last.close,
            previous_close,
            volume: last.volume,
            session: last.date,
        })
    }
}
