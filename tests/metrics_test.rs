use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sterling::metrics::{
    grams_per_troy_ounce, krw_per_gram, percent_change, price_bands, top_n_by, volume_ratio,
};

#[test]
fn troy_ounce_constant() {
    assert_eq!(grams_per_troy_ounce(), dec!(31.1034768));
}

#[test]
fn krw_conversion_exact_cases() {
    // One troy ounce at rate 1 is exactly one ounce's worth of grams.
    assert_eq!(krw_per_gram(dec!(31.1034768), dec!(1)), dec!(1));
    assert_eq!(krw_per_gram(dec!(62.2069536), dec!(2)), dec!(4));
}

#[test]
fn krw_conversion_rounds_sensibly() {
    let per_gram = krw_per_gram(dec!(32), dec!(1300));
    assert_eq!(per_gram.round_dp(2), dec!(1337.47));
}

#[test]
fn percent_change_basics() {
    assert_eq!(percent_change(dec!(110), dec!(100)), Some(dec!(10)));
    assert_eq!(percent_change(dec!(90), dec!(100)), Some(dec!(-10)));
}

#[test]
fn percent_change_equal_inputs_is_exactly_zero() {
    assert_eq!(percent_change(dec!(42.5), dec!(42.5)), Some(Decimal::ZERO));
}

#[test]
fn percent_change_guards_zero_previous() {
    assert_eq!(percent_change(dec!(100), Decimal::ZERO), None);
}

#[test]
fn volume_ratio_basics() {
    assert_eq!(volume_ratio(dec!(300), Some(dec!(200))), Some(dec!(150)));
    assert_eq!(volume_ratio(dec!(50), Some(dec!(200))), Some(dec!(25)));
}

#[test]
fn volume_ratio_no_comparison_available() {
    // Zero or missing prior volume means "no comparison", not a default.
    assert_eq!(volume_ratio(dec!(300), Some(Decimal::ZERO)), None);
    assert_eq!(volume_ratio(dec!(300), None), None);
}

#[test]
fn price_bands_fixed_offsets() {
    let bands = price_bands(dec!(10000));
    assert_eq!(bands.target, dec!(10300));
    assert_eq!(bands.stop, dec!(9800));
}

#[test]
fn top_n_selects_greatest_and_sorts_descending() {
    let rows = vec![("a", dec!(10)), ("b", dec!(40)), ("c", dec!(20)), ("d", dec!(30))];
    let top = top_n_by(rows, 2, |r| r.1);
    assert_eq!(top, vec![("b", dec!(40)), ("d", dec!(30))]);
}

#[test]
fn top_n_breaks_ties_by_original_order() {
    let rows = vec![("first", dec!(20)), ("second", dec!(20)), ("third", dec!(20))];
    let top = top_n_by(rows, 2, |r| r.1);
    assert_eq!(top, vec![("first", dec!(20)), ("second", dec!(20))]);
}

#[test]
fn top_n_larger_than_input_returns_all() {
    let rows = vec![("a", dec!(1)), ("b", dec!(2))];
    let top = top_n_by(rows, 10, |r| r.1);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "b");
}
