//! Domestic exchange provider client (KRX-style JSON endpoint).
//!
//! Queries the exchange's `getJSON.cmd` endpoint by trade date and market
//! segment for the full daily summary table. Numeric fields arrive as
//! comma-grouped strings (`"1,234,567"`); a bare `"-"` means the value is
//! absent (halted or newly listed issues).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::models::{MarketRow, MarketSegment};
use crate::{Result, SterlingError};

/// Statement id for the full daily summary table.
const DAILY_TABLE_BLD: &str = "dbms/MDC/STAT/standard/MDCSTAT01501";

/// HTTP client for the domestic exchange provider.
pub struct ExchangeClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExchangeClient {
    /// Creates a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Http`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full daily summary table for a segment and trade date.
    ///
    /// An empty table (non-trading day the calendar missed) is returned as
    /// an empty vector; callers decide whether that is an error.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Http`] on request failure and
    /// [`SterlingError::Json`] on a malformed body.
    pub async fn market_day(
        &self,
        segment: MarketSegment,
        date: NaiveDate,
    ) -> Result<Vec<MarketRow>> {
        let url = format!("{}/comm/bldAttendant/getJSON.cmd", self.base_url);
        let trade_date = date.format("%Y%m%d").to_string();
        debug!(%segment, %date, "fetching daily market table");

        let form = [
            ("bld", DAILY_TABLE_BLD),
            ("locale", "ko_KR"),
            ("mktId", segment.as_mkt_id()),
            ("trdDd", trade_date.as_str()),
            ("share", "1"),
            ("money", "1"),
            ("csvxls_isNo", "false"),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let table: DailyTableResponse = serde_json::from_str(&body)?;
        Ok(rows_from_table(table))
    }
}

/// Wire payload of the daily summary statement.
#[derive(Debug, Deserialize)]
pub struct DailyTableResponse {
    #[serde(rename = "OutBlock_1", default)]
    pub rows: Vec<RawMarketRow>,
}

/// One raw table row with the exchange's column names.
#[derive(Debug, Deserialize)]
pub struct RawMarketRow {
    #[serde(rename = "ISU_SRT_CD")]
    pub code: String,
    #[serde(rename = "ISU_ABBRV")]
    pub name: String,
    #[serde(rename = "TDD_CLSPRC")]
    pub close: String,
    #[serde(rename = "FLUC_RT", default)]
    pub change_pct: String,
    #[serde(rename = "ACC_TRDVOL", default)]
    pub volume: String,
    #[serde(rename = "TDD_OPNPRC", default)]
    pub open: String,
}

/// Normalizes raw rows, dropping issues without a usable close or volume
/// (halted or newly listed). Missing change/open default to zero; a zero
/// open later yields "no comparison" for the open-move metric.
pub fn rows_from_table(response: DailyTableResponse) -> Vec<MarketRow> {
    response
        .rows
        .into_iter()
        .filter_map(|raw| {
            let close = parse_grouped(&raw.close)?;
            let volume = parse_grouped(&raw.volume)?;
            Some(MarketRow {
                code: raw.code,
                name: raw.name,
                close,
                change_pct: parse_grouped(&raw.change_pct).unwrap_or(Decimal::ZERO),
                volume,
                open: parse_grouped(&raw.open).unwrap_or(Decimal::ZERO),
            })
        })
        .collect()
}

/// Parses a comma-grouped exchange number.
///
/// Accepts `"1,234,567"`, bare digits, and signed decimals; `"-"` and the
/// empty string mean absent.
pub fn parse_grouped(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse().ok()
}
