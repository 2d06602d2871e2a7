//! Snapshot builder: one fetch-compute pass over both providers.
//!
//! The pipeline is the same every refresh: resolve the trading session and
//! its prior session through the calendar, fetch silver and FX bars plus
//! the two daily exchange tables (through the TTL caches), then run the
//! pure builders below. Fetches are sequential; the result is a fully
//! derived [`DashboardSnapshot`] the TUI renders as-is.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::cache::TtlCache;
use crate::calendar::TradingCalendar;
use crate::config::{AppConfig, SymbolConfig};
use crate::metrics;
use crate::models::{DailyBar, MarketRow, MarketSegment, QuoteSnapshot, RankingRow};
use crate::provider::{ExchangeClient, GlobalQuoteClient};
use crate::{Result, SterlingError};

/// How many daily bars to request for the closing-price chart.
const BAR_RANGE_DAYS: u32 = 30;

/// Silver card data: latest quote plus its derived conversions.
#[derive(Debug, Clone)]
pub struct SilverOverview {
    pub quote: QuoteSnapshot,
    /// Day-over-day change in percent; `None` when the previous close is zero.
    pub change_pct: Option<Decimal>,
    /// Last price converted to KRW per gram at the current FX rate.
    pub krw_per_gram: Decimal,
    /// USD/KRW rate used for the conversion.
    pub fx_rate: Decimal,
    /// Closing-price series for the line chart, oldest first.
    pub closes: Vec<(NaiveDate, Decimal)>,
}

/// Everything one render pass needs.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub silver: SilverOverview,
    /// Market segment the ranking table covers.
    pub segment: MarketSegment,
    /// Trading session the ranking table describes. One session behind the
    /// calendar's latest when the exchange has not published today's table
    /// yet.
    pub session: NaiveDate,
    pub prior_session: NaiveDate,
    /// Full watchlist, sorted strictly descending by volume.
    pub rows: Vec<RankingRow>,
    pub fetched_at: DateTime<Utc>,
}

/// Builds the silver overview from the silver and FX bar series.
///
/// # Errors
///
/// Returns [`SterlingError::Provider`] when either series is empty.
pub fn build_silver(
    silver_symbol: &str,
    bars: &[DailyBar],
    fx_symbol: &str,
    fx_bars: &[DailyBar],
) -> Result<SilverOverview> {
    let quote = QuoteSnapshot::from_bars(silver_symbol, bars)
        .ok_or_else(|| SterlingError::Provider(format!("{silver_symbol}: no bars returned")))?;
    let fx = QuoteSnapshot::from_bars(fx_symbol, fx_bars)
        .ok_or_else(|| SterlingError::Provider(format!("{fx_symbol}: no bars returned")))?;

    let change_pct = metrics::percent_change(quote.last, quote.previous_close);
    let krw_per_gram = metrics::krw_per_gram(quote.last, fx.last);
    let closes = bars.iter().map(|bar| (bar.date, bar.close)).collect();

    Ok(SilverOverview {
        quote,
        change_pct,
        krw_per_gram,
        fx_rate: fx.last,
        closes,
    })
}

/// Builds the derived watchlist rows from today's and the prior session's
/// exchange tables, sorted strictly descending by volume.
///
/// Watchlist codes absent from today's table are silently skipped (halted
/// or delisted issues). A code absent from the prior table, or one whose
/// prior volume is zero, gets `volume_ratio = None`.
pub fn build_ranking(
    today: &[MarketRow],
    prior: &[MarketRow],
    watchlist: &[String],
) -> Vec<RankingRow> {
    let rows: Vec<RankingRow> = watchlist
        .iter()
        .filter_map(|code| {
            let row = today.iter().find(|r| &r.code == code)?;
            let prior_volume = prior.iter().find(|r| &r.code == code).map(|r| r.volume);

            Some(RankingRow {
                code: row.code.clone(),
                name: row.name.clone(),
                close: row.close,
                change_pct: row.change_pct,
                volume: row.volume,
                open: row.open,
                volume_ratio: metrics::volume_ratio(row.volume, prior_volume),
                open_move_pct: metrics::percent_change(row.close, row.open),
                bands: metrics::price_bands(row.close),
            })
        })
        .collect();

    let n = rows.len();
    metrics::top_n_by(rows, n, |row| row.volume)
}

/// Orchestrates the per-refresh fetch-compute pass.
pub struct SnapshotService {
    global: GlobalQuoteClient,
    exchange: ExchangeClient,
    calendar: TradingCalendar,
    symbols: SymbolConfig,
    bar_cache: TtlCache<Vec<DailyBar>>,
    market_cache: TtlCache<Vec<MarketRow>>,
}

impl SnapshotService {
    /// Builds the service and its provider clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Http`] if a client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            global: GlobalQuoteClient::new(&config.providers.global_base_url)?,
            exchange: ExchangeClient::new(&config.providers.exchange_base_url)?,
            calendar: TradingCalendar::with_holidays(config.holidays.iter().copied()),
            symbols: config.symbols.clone(),
            bar_cache: TtlCache::new(config.cache_ttl),
            market_cache: TtlCache::new(config.cache_ttl),
        })
    }

    /// Drops every cached provider response (the manual refresh action).
    pub async fn clear_caches(&self) {
        self.bar_cache.clear().await;
        self.market_cache.clear().await;
    }

    /// Runs one full fetch-compute pass for `today`.
    ///
    /// # Errors
    ///
    /// Propagates provider, calendar, and empty-session errors; see
    /// [`SterlingError`].
    pub async fn build(&self, today: NaiveDate) -> Result<DashboardSnapshot> {
        let requested = self.calendar.latest_session_on_or_before(today)?;

        let silver_bars = self.cached_bars(&self.symbols.silver).await?;
        let fx_bars = self.cached_bars(&self.symbols.fx).await?;
        let silver = build_silver(&self.symbols.silver, &silver_bars, &self.symbols.fx, &fx_bars)?;

        let segment = MarketSegment::Kosdaq;
        let (session, today_table) = match self.cached_market_day(segment, requested).await {
            Ok(rows) => (requested, rows),
            Err(err) => {
                let fallback = publication_fallback(&self.calendar, err)?;
                let rows = self.cached_market_day(segment, fallback).await?;
                (fallback, rows)
            }
        };
        let prior_session = self.calendar.previous_session(session)?;
        let prior_table = self.cached_market_day(segment, prior_session).await?;
        let rows = build_ranking(&today_table, &prior_table, &self.symbols.watchlist);

        info!(%session, watch_rows = rows.len(), "snapshot built");

        Ok(DashboardSnapshot {
            silver,
            segment,
            session,
            prior_session,
            rows,
            fetched_at: Utc::now(),
        })
    }

    async fn cached_bars(&self, symbol: &str) -> Result<Vec<DailyBar>> {
        let key = format!("bars:{symbol}:{BAR_RANGE_DAYS}");
        if let Some(bars) = self.bar_cache.get(&key).await {
            return Ok(bars);
        }
        let bars = self.global.daily_bars(symbol, BAR_RANGE_DAYS).await?;
        self.bar_cache.insert(&key, bars.clone()).await;
        Ok(bars)
    }

    async fn cached_market_day(
        &self,
        segment: MarketSegment,
        date: NaiveDate,
    ) -> Result<Vec<MarketRow>> {
        let key = format!("market:{segment}:{date}");
        if let Some(rows) = self.market_cache.get(&key).await {
            return Ok(rows);
        }
        let rows = self.exchange.market_day(segment, date).await?;
        if rows.is_empty() {
            // Do not cache: the table may simply not be published yet.
            return Err(SterlingError::EmptySession(date));
        }
        self.market_cache.insert(&key, rows.clone()).await;
        Ok(rows)
    }
}

/// Steps back one session when the requested table is empty: the exchange
/// publishes the daily table after the close, so a dashboard launched on a
/// trading morning shows the previous session instead of failing. Every
/// other error propagates unchanged.
fn publication_fallback(calendar: &TradingCalendar, error: SterlingError) -> Result<NaiveDate> {
    match error {
        SterlingError::EmptySession(date) => {
            let fallback = calendar.previous_session(date)?;
            warn!(%date, %fallback, "daily table not published yet, showing previous session");
            Ok(fallback)
        }
        other => Err(other),
    }
}
