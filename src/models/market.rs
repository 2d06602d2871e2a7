//! Domestic exchange market segments and daily summary rows.

use rust_decimal::Decimal;

/// Market segment of the domestic exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarketSegment {
    #[default]
    Kosdaq,
    Kospi,
}

impl MarketSegment {
    /// Returns the `mktId` value expected by the exchange endpoint.
    pub fn as_mkt_id(&self) -> &'static str {
        match self {
            MarketSegment::Kosdaq => "KSQ",
            MarketSegment::Kospi => "STK",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MarketSegment::Kosdaq => "KOSDAQ",
            MarketSegment::Kospi => "KOSPI",
        }
    }
}

impl std::fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the exchange's full daily summary table.
///
/// Also the source of ticker-to-display-name resolution: `name` is the
/// exchange's abbreviated issue name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRow {
    /// Short issue code, e.g. `"445400"`.
    pub code: String,
    /// Display name, e.g. `"하이젠알앤엠"`.
    pub name: String,
    pub close: Decimal,
    /// Day-over-day fluctuation rate as reported by the exchange, in percent.
    pub change_pct: Decimal,
    pub volume: Decimal,
    pub open: Decimal,
}
