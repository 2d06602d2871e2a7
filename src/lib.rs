//! Sterling terminal dashboard library.
//!
//! Fetches silver futures and USD/KRW daily bars from a global quote
//! provider and the KOSDAQ daily OHLCV table from a domestic exchange
//! provider, computes derived metrics (KRW-per-gram conversion, day
//! changes, volume ratios, target/stop bands, top-N ranking), and renders
//! them in a Ratatui TUI.

pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod snapshot;
pub mod tui;

pub use error::{Result, SterlingError};
