//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default; overrides:
//! - `STERLING_GLOBAL_BASE_URL` — global quote provider base URL
//! - `STERLING_EXCHANGE_BASE_URL` — domestic exchange provider base URL
//! - `STERLING_SILVER_SYMBOL` / `STERLING_FX_SYMBOL` — quote symbols
//! - `STERLING_WATCHLIST` — comma-separated issue codes
//! - `STERLING_CACHE_TTL_SECS` — provider cache TTL (default 300)
//! - `STERLING_REFRESH_SECS` — dashboard refresh interval (default 60)
//! - `STERLING_TOP_N` — number of ranking cards (default 5)
//! - `STERLING_HOLIDAYS` — comma-separated ISO dates the exchange is closed

use std::time::Duration;

use chrono::NaiveDate;

use crate::{Result, SterlingError};

/// Default global quote provider (Yahoo-style chart API).
const DEFAULT_GLOBAL_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Default domestic exchange data endpoint (KRX-style JSON API).
const DEFAULT_EXCHANGE_BASE_URL: &str = "http://data.krx.co.kr";

/// Silver futures front-month contract.
const DEFAULT_SILVER_SYMBOL: &str = "SI=F";

/// USD/KRW exchange rate.
const DEFAULT_FX_SYMBOL: &str = "USDKRW=X";

/// The KOSDAQ robotics tickers the original dashboard watched.
const DEFAULT_WATCHLIST: [&str; 8] = [
    "445400", // 하이젠알앤엠
    "058610", // SPG
    "272410", // 레인보우로보틱스
    "307070", // 에스비비테크
    "348340", // 뉴로메카
    "264850", // 이랜시스
    "056080", // 유진로봇
    "108490", // 로보티즈
];

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_REFRESH_SECS: u64 = 60;
const DEFAULT_TOP_N: usize = 5;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub providers: ProviderConfig,
    pub symbols: SymbolConfig,
    /// TTL for cached provider responses.
    pub cache_ttl: Duration,
    /// How often the background loop rebuilds the snapshot.
    pub refresh_interval: Duration,
    /// How many ranking cards to show.
    pub top_n: usize,
    /// Exchange holidays (weekends are always closed).
    pub holidays: Vec<NaiveDate>,
}

/// Base URLs of the two data providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub global_base_url: String,
    pub exchange_base_url: String,
}

/// Symbols and issue codes to track.
#[derive(Debug, Clone)]
pub struct SymbolConfig {
    pub silver: String,
    pub fx: String,
    pub watchlist: Vec<String>,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`SterlingError::Config`] when a numeric variable fails to
/// parse or is zero, or when a holiday date is not `YYYY-MM-DD`.
pub fn fetch_config() -> Result<AppConfig> {
    let global_base_url = non_empty_var("STERLING_GLOBAL_BASE_URL")
        .unwrap_or_else(|| DEFAULT_GLOBAL_BASE_URL.to_string());
    let exchange_base_url = non_empty_var("STERLING_EXCHANGE_BASE_URL")
        .unwrap_or_else(|| DEFAULT_EXCHANGE_BASE_URL.to_string());

    let silver = non_empty_var("STERLING_SILVER_SYMBOL")
        .unwrap_or_else(|| DEFAULT_SILVER_SYMBOL.to_string());
    let fx = non_empty_var("STERLING_FX_SYMBOL").unwrap_or_else(|| DEFAULT_FX_SYMBOL.to_string());

    let watchlist = match non_empty_var("STERLING_WATCHLIST") {
        Some(raw) => raw
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect(),
        None => DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
    };

    let cache_ttl = Duration::from_secs(positive_u64_var(
        "STERLING_CACHE_TTL_SECS",
        DEFAULT_CACHE_TTL_SECS,
    )?);
    let refresh_interval = Duration::from_secs(positive_u64_var(
        "STERLING_REFRESH_SECS",
        DEFAULT_REFRESH_SECS,
    )?);

    let top_n = positive_u64_var("STERLING_TOP_N", DEFAULT_TOP_N as u64)? as usize;

    let holidays = match non_empty_var("STERLING_HOLIDAYS") {
        Some(raw) => parse_holidays(&raw)?,
        None => Vec::new(),
    };

    Ok(AppConfig {
        providers: ProviderConfig {
            global_base_url,
            exchange_base_url,
        },
        symbols: SymbolConfig {
            silver,
            fx,
            watchlist,
        },
        cache_ttl,
        refresh_interval,
        top_n,
        holidays,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses a positive integer variable, falling back to `default` when unset.
fn positive_u64_var(name: &str, default: u64) -> Result<u64> {
    let Some(raw) = non_empty_var(name) else {
        return Ok(default);
    };
    let value: u64 = raw
        .parse()
        .map_err(|_| SterlingError::Config(format!("{name} is not a valid integer: {raw:?}")))?;
    if value == 0 {
        return Err(SterlingError::Config(format!("{name} must be non-zero")));
    }
    Ok(value)
}

/// Parses a comma-separated list of ISO dates.
fn parse_holidays(raw: &str) -> Result<Vec<NaiveDate>> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<NaiveDate>().map_err(|_| {
                SterlingError::Config(format!("STERLING_HOLIDAYS entry is not YYYY-MM-DD: {s:?}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const ALL_VARS: [&str; 9] = [
        "STERLING_GLOBAL_BASE_URL",
        "STERLING_EXCHANGE_BASE_URL",
        "STERLING_SILVER_SYMBOL",
        "STERLING_FX_SYMBOL",
        "STERLING_WATCHLIST",
        "STERLING_CACHE_TTL_SECS",
        "STERLING_REFRESH_SECS",
        "STERLING_TOP_N",
        "STERLING_HOLIDAYS",
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|v| (*v, None)).collect()
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&cleared(), || {
            let config = fetch_config().unwrap();
            assert_eq!(config.providers.global_base_url, DEFAULT_GLOBAL_BASE_URL);
            assert_eq!(
                config.providers.exchange_base_url,
                DEFAULT_EXCHANGE_BASE_URL
            );
            assert_eq!(config.symbols.silver, "SI=F");
            assert_eq!(config.symbols.fx, "USDKRW=X");
            assert_eq!(config.symbols.watchlist.len(), 8);
            assert_eq!(config.cache_ttl, Duration::from_secs(300));
            assert_eq!(config.refresh_interval, Duration::from_secs(60));
            assert_eq!(config.top_n, 5);
            assert!(config.holidays.is_empty());
        });
    }

    #[test]
    fn watchlist_override_trims_and_drops_empties() {
        let mut vars = cleared();
        vars.push(("STERLING_WATCHLIST", Some(" 445400 ,108490,,056080 ")));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.symbols.watchlist, vec!["445400", "108490", "056080"]);
        });
    }

    #[test]
    fn rejects_non_numeric_ttl() {
        let mut vars = cleared();
        vars.push(("STERLING_CACHE_TTL_SECS", Some("five minutes")));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("STERLING_CACHE_TTL_SECS"));
        });
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let mut vars = cleared();
        vars.push(("STERLING_REFRESH_SECS", Some("0")));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must be non-zero"));
        });
    }

    #[test]
    fn parses_holiday_list() {
        let mut vars = cleared();
        vars.push(("STERLING_HOLIDAYS", Some("2025-01-01, 2025-03-01")));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(
                config.holidays,
                vec![
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                ]
            );
        });
    }

    #[test]
    fn rejects_malformed_holiday() {
        let mut vars = cleared();
        vars.push(("STERLING_HOLIDAYS", Some("01/01/2025")));
        with_env(&vars, || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("STERLING_HOLIDAYS"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        let mut vars = cleared();
        vars.push(("STERLING_GLOBAL_BASE_URL", Some("")));
        vars.push(("STERLING_TOP_N", Some("")));
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.providers.global_base_url, DEFAULT_GLOBAL_BASE_URL);
            assert_eq!(config.top_n, 5);
        });
    }
}
