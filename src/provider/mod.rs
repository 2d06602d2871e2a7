//! HTTP clients for the two external market-data providers.
//!
//! [`global`] talks to a Yahoo-style chart API for historical daily bars
//! (silver futures, currency pairs). [`krx`] talks to a KRX-style JSON
//! endpoint for the domestic exchange's full daily summary table, which is
//! also the source of ticker display names.

pub mod global;
pub mod krx;

pub use global::GlobalQuoteClient;
pub use krx::ExchangeClient;
