//! Date keys and the fixed analysis windows.
//!
//! Proposal rows carry their date as a `YYYYMMDD` integer. The analysis
//! compares the week before two operational changes (new propose-deadline
//! windows on 2025-12-01, higher pickup price on 2025-12-03) with the days
//! after them, plus the combined range.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A `YYYYMMDD` date stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(u32);

impl DateKey {
    /// Wraps a raw key without validating it.
    pub const fn new_unchecked(value: u32) -> Self {
        Self(value)
    }

    /// Parses a raw integer, rejecting values that are not a calendar date.
    pub fn parse(value: i64) -> Result<Self> {
        let raw = u32::try_from(value).map_err(|_| ModelError::InvalidDateKey(value))?;
        let key = Self(raw);
        key.to_date().ok_or(ModelError::InvalidDateKey(value))?;
        Ok(key)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // Years before 0 never appear in proposal data.
        let year = u32::try_from(date.year()).unwrap_or(0);
        Self(year * 10_000 + date.month() * 100 + date.day())
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts to a calendar date, `None` if the key is not a valid date.
    pub fn to_date(self) -> Option<NaiveDate> {
        let year = i32::try_from(self.0 / 10_000).ok()?;
        let month = (self.0 / 100) % 100;
        let day = self.0 % 100;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A named, inclusive range of date keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// Short identifier used for exported file names.
    pub id: &'static str,
    /// Human-readable title shown with the correlation matrix.
    pub title: &'static str,
    pub start: DateKey,
    pub end: DateKey,
}

impl DateWindow {
    pub const fn new(id: &'static str, title: &'static str, start: u32, end: u32) -> Self {
        Self {
            id,
            title,
            start: DateKey::new_unchecked(start),
            end: DateKey::new_unchecked(end),
        }
    }

    /// True when `key` falls inside the window, both ends included.
    pub fn contains(&self, key: i64) -> bool {
        key >= i64::from(self.start.value()) && key <= i64::from(self.end.value())
    }

    /// Number of calendar days covered by the window.
    pub fn days(&self) -> Option<i64> {
        let start = self.start.to_date()?;
        let end = self.end.to_date()?;
        Some((end - start).num_days() + 1)
    }

    /// Looks up one of the [`ANALYSIS_WINDOWS`] by id.
    pub fn find(id: &str) -> Result<&'static DateWindow> {
        ANALYSIS_WINDOWS
            .iter()
            .find(|window| window.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| ModelError::UnknownWindow(id.to_string()))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} to {})", self.title, self.start, self.end)
    }
}

/// Windows analysed on every run, in presentation order.
pub const ANALYSIS_WINDOWS: [DateWindow; 3] = [
    DateWindow::new("before", "Nov 22–30 (Before Changes)", 20251122, 20251130),
    DateWindow::new("after", "Dec 1–6 (After Changes)", 20251201, 20251206),
    DateWindow::new("full", "Nov 22–Dec 6 (Full Window)", 20251122, 20251206),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_are_inclusive() {
        let before = DateWindow::find("before").unwrap();
        assert!(before.contains(20251122));
        assert!(before.contains(20251130));
        assert!(!before.contains(20251121));
        assert!(!before.contains(20251201));
    }

    #[test]
    fn windows_are_valid_dates() {
        for window in &ANALYSIS_WINDOWS {
            assert!(window.start.to_date().is_some(), "{}", window.id);
            assert!(window.end.to_date().is_some(), "{}", window.id);
            assert!(window.start <= window.end, "{}", window.id);
        }
        assert_eq!(ANALYSIS_WINDOWS[0].days(), Some(9));
        assert_eq!(ANALYSIS_WINDOWS[1].days(), Some(6));
        assert_eq!(ANALYSIS_WINDOWS[2].days(), Some(15));
    }

    #[test]
    fn parse_rejects_non_dates() {
        assert!(DateKey::parse(20251131).is_err());
        assert!(DateKey::parse(-1).is_err());
        assert_eq!(DateKey::parse(20251201).unwrap().value(), 20251201);
    }

    #[test]
    fn date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        let key = DateKey::from_date(date);
        assert_eq!(key.value(), 20251203);
        assert_eq!(key.to_date(), Some(date));
        assert_eq!(key.to_string(), "2025-12-03");
    }

    #[test]
    fn unknown_window_is_an_error() {
        assert!(matches!(
            DateWindow::find("later"),
            Err(ModelError::UnknownWindow(_))
        ));
    }
}
