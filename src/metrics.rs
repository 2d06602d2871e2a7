//! Pure derived-metric calculators.
//!
//! Every function here is arithmetic over [`Decimal`] with no I/O, so the
//! whole module is deterministic and directly testable. Division guards
//! return `None` instead of a fabricated default: a missing comparison is
//! rendered as "no data", never as a made-up ratio.

use rust_decimal::Decimal;

use crate::models::PriceBands;

/// Grams per troy ounce.
pub fn grams_per_troy_ounce() -> Decimal {
    // 31.1034768
    Decimal::new(311_034_768, 7)
}

/// Converts a USD-per-troy-ounce price to KRW per gram.
///
/// `usd_price × fx_rate ÷ 31.1034768`.
pub fn krw_per_gram(usd_per_ounce: Decimal, fx_rate: Decimal) -> Decimal {
    usd_per_ounce * fx_rate / grams_per_troy_ounce()
}

/// Percent change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero. Equal inputs give exactly zero.
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some((current - previous) / previous * Decimal::ONE_HUNDRED)
}

/// Today's volume as a percentage of the prior session's volume.
///
/// Returns `None` when the prior volume is absent or zero — "no comparison
/// available" rather than either of the legacy fallbacks.
pub fn volume_ratio(today: Decimal, prior: Option<Decimal>) -> Option<Decimal> {
    let prior = prior?;
    if prior.is_zero() {
        return None;
    }
    Some(today / prior * Decimal::ONE_HUNDRED)
}

/// Fixed +3% / −2% target and stop bands around a close.
///
/// Values stay exact here; truncation to integer currency units happens at
/// render time only.
pub fn price_bands(close: Decimal) -> PriceBands {
    PriceBands {
        target: close * Decimal::new(103, 2),
        stop: close * Decimal::new(98, 2),
    }
}

/// Keeps the `n` rows with the greatest key, sorted strictly descending.
///
/// Ties are broken by original row order (stable sort). `n` larger than the
/// row count returns all rows.
pub fn top_n_by<T, F>(mut rows: Vec<T>, n: usize, key: F) -> Vec<T>
where
    F: Fn(&T) -> Decimal,
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows.truncate(n);
    rows
}
