//! The trailing calendar window analytics are computed over.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::MAX_WINDOW_DAYS;

/// A run of consecutive calendar days ending on `today`, inclusive.
///
/// # Example
///
/// ```rust
/// use chatpulse::analytics::ActivityWindow;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let window = ActivityWindow::ending_on(today, 7);
///
/// assert_eq!(window.dates().len(), 7);
/// assert_eq!(window.first_day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(window.last_day(), today);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityWindow {
    dates: Vec<NaiveDate>,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ActivityWindow {
    /// Builds the window of `days` dates ending on `today`.
    ///
    /// `days` is clamped to `1..=MAX_WINDOW_DAYS`.
    pub fn ending_on(today: NaiveDate, days: u32) -> Self {
        let days = days.clamp(1, MAX_WINDOW_DAYS);
        let dates: Vec<NaiveDate> = (0..days)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
            .collect();

        let first = dates.first().copied().unwrap_or(today);
        let start = first.and_time(NaiveTime::MIN);
        let end = today
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| today.and_time(NaiveTime::MIN));

        Self { dates, start, end }
    }

    /// Returns the dates in chronological order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the oldest date.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the newest date (today).
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Start of the first day, 00:00:00.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// End of today, 23:59:59.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; a window has at least one day.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns `true` if `ts` falls within the full-day span.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// Returns `true` if `date` is one of the window's dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }
}
