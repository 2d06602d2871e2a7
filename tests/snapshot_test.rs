use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sterling::SterlingError;
use sterling::metrics;
use sterling::models::{DailyBar, MarketRow};
use sterling::snapshot::{build_ranking, build_silver};

fn bar(day: u32, close: Decimal, volume: Decimal) -> DailyBar {
    DailyBar {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        open: close,
        high: close,
        low: close,
        close,
        volume,
    }
}

fn row(code: &str, name: &str, close: Decimal, volume: Decimal, open: Decimal) -> MarketRow {
    MarketRow {
        code: code.to_string(),
        name: name.to_string(),
        close,
        change_pct: dec!(1.00),
        volume,
        open,
    }
}

#[test]
fn silver_overview_derives_change_and_conversion() {
    let bars = vec![bar(6, dec!(31.0), dec!(100)), bar(7, dec!(32.0), dec!(120))];
    let fx_bars = vec![bar(7, dec!(1300), dec!(0))];

    let silver = build_silver("SI=F", &bars, "USDKRW=X", &fx_bars).unwrap();

    assert_eq!(silver.quote.last, dec!(32.0));
    assert_eq!(silver.fx_rate, dec!(1300));
    assert_eq!(
        silver.change_pct,
        metrics::percent_change(dec!(32.0), dec!(31.0))
    );
    assert_eq!(
        silver.krw_per_gram,
        metrics::krw_per_gram(dec!(32.0), dec!(1300))
    );
    assert_eq!(silver.closes.len(), 2);
    assert_eq!(silver.closes[1].1, dec!(32.0));
}

#[test]
fn silver_overview_requires_bars() {
    let fx_bars = vec![bar(7, dec!(1300), dec!(0))];
    assert!(matches!(
        build_silver("SI=F", &[], "USDKRW=X", &fx_bars),
        Err(SterlingError::Provider(_))
    ));
    let bars = vec![bar(7, dec!(32.0), dec!(100))];
    assert!(matches!(
        build_silver("SI=F", &bars, "USDKRW=X", &[]),
        Err(SterlingError::Provider(_))
    ));
}

#[test]
fn ranking_sorts_watchlist_by_volume_descending() {
    let today = vec![
        row("445400", "하이젠알앤엠", dec!(12340), dec!(1000), dec!(12100)),
        row("058610", "SPG", dec!(8000), dec!(3000), dec!(7900)),
        row("108490", "로보티즈", dec!(25000), dec!(2000), dec!(24500)),
        // Not on the watchlist; must not appear.
        row("999999", "기타", dec!(100), dec!(999_999), dec!(100)),
    ];
    let prior = vec![
        row("445400", "하이젠알앤엠", dec!(12000), dec!(500), dec!(12000)),
        row("058610", "SPG", dec!(7800), dec!(6000), dec!(7700)),
        row("108490", "로보티즈", dec!(24000), dec!(2000), dec!(23900)),
    ];
    let watchlist = vec![
        "445400".to_string(),
        "058610".to_string(),
        "108490".to_string(),
    ];

    let rows = build_ranking(&today, &prior, &watchlist);

    let codes: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["058610", "108490", "445400"]);

    // Derived fields on the top row.
    assert_eq!(rows[0].volume_ratio, Some(dec!(50))); // 3000 / 6000
    assert_eq!(rows[0].bands.target, dec!(8000) * dec!(1.03));
    assert_eq!(rows[0].bands.stop, dec!(8000) * dec!(0.98));
    assert_eq!(
        rows[0].open_move_pct,
        metrics::percent_change(dec!(8000), dec!(7900))
    );
}

#[test]
fn ranking_missing_or_zero_prior_volume_means_no_comparison() {
    let today = vec![
        row("445400", "하이젠알앤엠", dec!(12340), dec!(1000), dec!(12100)),
        row("058610", "SPG", dec!(8000), dec!(3000), dec!(7900)),
    ];
    // 445400 absent from the prior session, 058610 present with zero volume.
    let prior = vec![row("058610", "SPG", dec!(7800), Decimal::ZERO, dec!(7700))];
    let watchlist = vec!["445400".to_string(), "058610".to_string()];

    let rows = build_ranking(&today, &prior, &watchlist);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.volume_ratio.is_none()));
}

#[test]
fn ranking_skips_watch_codes_absent_today() {
    let today = vec![row("445400", "하이젠알앤엠", dec!(12340), dec!(1000), dec!(12100))];
    let prior = Vec::new();
    let watchlist = vec!["445400".to_string(), "058610".to_string()];

    let rows = build_ranking(&today, &prior, &watchlist);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code, "445400");
}

#[test]
fn ranking_zero_open_means_no_open_move() {
    let today = vec![row("445400", "하이젠알앤엠", dec!(12340), dec!(1000), Decimal::ZERO)];
    let prior = Vec::new();
    let watchlist = vec!["445400".to_string()];

    let rows = build_ranking(&today, &prior, &watchlist);

    assert_eq!(rows[0].open_move_pct, None);
}

#[test]
fn ranking_ties_keep_watchlist_order() {
    let today = vec![
        row("445400", "하이젠알앤엠", dec!(12340), dec!(1000), dec!(12100)),
        row("058610", "SPG", dec!(8000), dec!(1000), dec!(7900)),
    ];
    let watchlist = vec!["445400".to_string(), "058610".to_string()];

    let rows = build_ranking(&today, &[], &watchlist);

    assert_eq!(rows[0].code, "445400");
    assert_eq!(rows[1].code, "058610");
}
