//! Explicit trading-calendar lookup.
//!
//! Replaces the "walk backward day by day until a non-empty table shows up"
//! retry loop with a calendar that knows which dates are sessions. The scan
//! for the most recent session is bounded; exhausting the bound is a typed
//! error, not a silent fallback.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{Result, SterlingError};

/// Maximum number of calendar days to scan backwards for a session.
/// Generous enough to cross any holiday cluster plus weekends.
const MAX_SCAN_DAYS: u64 = 14;

/// Trading calendar: weekdays minus a configured holiday set.
#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl TradingCalendar {
    /// Calendar with no holidays (weekends only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Calendar with the given exchange holidays.
    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(holidays: I) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Whether the exchange trades on `date`.
    pub fn is_session(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }

    /// Most recent session on or before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::NoSession`] when no session exists within
    /// the scan bound.
    pub fn latest_session_on_or_before(&self, date: NaiveDate) -> Result<NaiveDate> {
        let mut candidate = date;
        for _ in 0..=MAX_SCAN_DAYS {
            if self.is_session(candidate) {
                return Ok(candidate);
            }
            candidate = candidate
                .checked_sub_days(Days::new(1))
                .ok_or(SterlingError::NoSession(date))?;
        }
        Err(SterlingError::NoSession(date))
    }

    /// The session strictly before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::NoSession`] when no session exists within
    /// the scan bound.
    pub fn previous_session(&self, date: NaiveDate) -> Result<NaiveDate> {
        let candidate = date
            .checked_sub_days(Days::new(1))
            .ok_or(SterlingError::NoSession(date))?;
        self.latest_session_on_or_before(candidate)
    }
}
