//! Display formatting helpers.
//!
//! Currency values are truncated to integer units and digit-grouped only
//! here; all arithmetic upstream stays exact.

use rust_decimal::Decimal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to integer currency units and groups digits by thousands.
pub fn grouped_int(value: Decimal) -> String {
    let truncated = value.trunc().normalize().to_string();
    let (sign, digits) = match truncated.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", truncated.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Formats a percent value with an explicit sign, e.g. `+1.57%`.
pub fn signed_pct(value: Decimal) -> String {
    format!("{:+.2}%", value)
}

/// Formats an optional percent value, `--` when no comparison is available.
pub fn opt_pct(value: Option<Decimal>) -> String {
    match value {
        Some(v) => signed_pct(v),
        None => "--".to_string(),
    }
}

/// Pads (or truncates) a string to a fixed display width.
///
/// Uses terminal cell width, not character count, so double-width Korean
/// names line up with ASCII ones.
pub fn pad_display(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        return format!("{s}{}", " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
