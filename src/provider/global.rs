//! Global quote provider client (Yahoo-style chart API).
//!
//! Queries `GET {base}/v8/finance/chart/{symbol}?range={n}d&interval=1d`
//! and normalizes the response into [`DailyBar`] rows. The chart payload
//! carries epoch timestamps plus parallel OHLCV arrays where individual
//! slots can be null on non-trading gaps; slots without a close are
//! dropped whole so the arrays never get misaligned.

use chrono::DateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tracing::debug;

use crate::models::DailyBar;
use crate::{Result, SterlingError};

/// Some chart endpoints reject requests without a browser-ish user agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; sterling/0.1)";

/// Decimal places kept when converting provider floats.
const PRICE_DECIMALS: u32 = 4;

/// HTTP client for the global quote provider.
pub struct GlobalQuoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl GlobalQuoteClient {
    /// Creates a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Http`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches up to `days` daily bars for `symbol`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Http`] on request failure,
    /// [`SterlingError::Json`] on a malformed body, and
    /// [`SterlingError::Provider`] when the provider reports an error or
    /// the payload is missing required fields.
    pub async fn daily_bars(&self, symbol: &str, days: u32) -> Result<Vec<DailyBar>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        debug!(symbol, days, "fetching daily bars");

        let response = self
            .http
            .get(&url)
            .query(&[("range", format!("{days}d")), ("interval", "1d".into())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let chart: ChartResponse = serde_json::from_str(&body)?;
        bars_from_chart(symbol, chart)
    }
}

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Error object the provider embeds instead of using HTTP status codes.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

/// Parallel OHLCV arrays; a null slot means no data for that timestamp.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

/// Normalizes a chart payload into daily bars, oldest first.
///
/// Slots with a null close are skipped. A slot with a close but a null
/// open/high/low falls back to the close for that field; a null volume
/// becomes zero.
pub fn bars_from_chart(symbol: &str, response: ChartResponse) -> Result<Vec<DailyBar>> {
    if let Some(error) = response.chart.error {
        return Err(SterlingError::Provider(format!(
            "{symbol}: {} ({})",
            error.description, error.code
        )));
    }

    let result = response
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| SterlingError::Provider(format!("{symbol}: empty chart result")))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(close) = slot(&quote.close, i) else {
            continue;
        };

        let date = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| {
                SterlingError::Provider(format!("{symbol}: invalid bar timestamp {ts}"))
            })?
            .date_naive();

        let close = to_decimal(symbol, close)?;
        let open = opt_decimal(symbol, slot(&quote.open, i))?.unwrap_or(close);
        let high = opt_decimal(symbol, slot(&quote.high, i))?.unwrap_or(close);
        let low = opt_decimal(symbol, slot(&quote.low, i))?.unwrap_or(close);
        let volume = opt_decimal(symbol, slot(&quote.volume, i))?.unwrap_or(Decimal::ZERO);

        bars.push(DailyBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(bars)
}

fn slot(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

fn to_decimal(symbol: &str, value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(PRICE_DECIMALS))
        .ok_or_else(|| SterlingError::Provider(format!("{symbol}: non-finite value {value}")))
}

fn opt_decimal(symbol: &str, value: Option<f64>) -> Result<Option<Decimal>> {
    value.map(|v| to_decimal(symbol, v)).transpose()
}
