//! Shared data models.
//!
//! Wire-facing provider payloads live next to their clients in
//! [`crate::provider`]; this module holds the normalized types the rest of
//! the crate computes against.

pub mod bar;
pub mod market;
pub mod quote;
pub mod ranking;

pub use bar::DailyBar;
pub use market::{MarketRow, MarketSegment};
pub use quote::QuoteSnapshot;
pub use ranking::{PriceBands, RankingRow};
