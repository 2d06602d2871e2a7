//! Derived ranking rows for the watchlist table.

use rust_decimal::Decimal;

/// Target/stop price offsets around a close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBands {
    /// Close × 1.03.
    pub target: Decimal,
    /// Close × 0.98.
    pub stop: Decimal,
}

/// One watchlist ticker with its derived momentum fields.
///
/// `volume_ratio` and `open_move_pct` are `None` when no comparison is
/// available (missing or zero prior-session volume, zero open price).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub code: String,
    pub name: String,
    pub close: Decimal,
    /// Day-over-day change in percent, from the exchange table.
    pub change_pct: Decimal,
    pub volume: Decimal,
    pub open: Decimal,
    /// Today's volume as a percentage of the prior session's.
    pub volume_ratio: Option<Decimal>,
    /// Percent move off the session open.
    pub open_move_pct: Option<Decimal>,
    pub bands: PriceBands,
}
