//! Trailing-window activity aggregation.
//!
//! The aggregator is total: any record slice, including an empty one,
//! produces a result with exactly one [`DailyActivity`] per window day.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::analytics::ActivityAggregator;
//! use chatpulse::config::AnalyticsConfig;
//! use chatpulse::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
//! let at = today.and_hms_opt(12, 0, 0).unwrap();
//!
//! let records = vec![MessageRecord::regular(at, "Alice", "hi")];
//! let aggregator = ActivityAggregator::with_config(AnalyticsConfig::new().with_today(today));
//! let result = aggregator.compute(&records);
//!
//! assert_eq!(result.daily_data.len(), 7);
//! assert_eq!(result.daily_data[6].active_users, 1);
//! assert_eq!(result.summary.total_active_users, 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, info, trace};

use super::result::{ActivitySummary, AnalyticsResult, DailyActivity, DailyBucket};
use super::window::ActivityWindow;
use crate::config::AnalyticsConfig;
use crate::record::{MessageRecord, SystemAction};

/// Computes daily and summary activity over a trailing window.
#[derive(Debug, Clone, Default)]
pub struct ActivityAggregator {
    config: AnalyticsConfig,
}

impl ActivityAggregator {
    /// Creates an aggregator with the default 7-day / 4-day settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with custom configuration.
    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Returns the window this aggregator would use right now.
    pub fn window(&self) -> ActivityWindow {
        ActivityWindow::ending_on(self.config.resolve_today(), self.config.window_days)
    }

    /// Aggregates `records` over the current window.
    pub fn compute(&self, records: &[MessageRecord]) -> AnalyticsResult {
        let window = self.window();
        debug!(
            start = %window.start(),
            end = %window.end(),
            records = records.len(),
            "computing activity"
        );

        if records.is_empty() {
            return AnalyticsResult::empty(&window);
        }

        let tally = Tally::collect(&window, records);
        let result = tally.into_result(&window, self.config.min_active_days);

        info!(
            active = result.summary.total_active_users,
            new = result.summary.total_new_users,
            regulars = result.summary.regular_user_count,
            "activity computed"
        );
        result
    }
}

/// Aggregates `records` with the default configuration.
pub fn compute(records: &[MessageRecord]) -> AnalyticsResult {
    ActivityAggregator::new().compute(records)
}

/// Per-day buckets plus each author's distinct active dates.
struct Tally {
    buckets: BTreeMap<NaiveDate, DailyBucket>,
    active_dates: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl Tally {
    fn collect(window: &ActivityWindow, records: &[MessageRecord]) -> Self {
        let mut tally = Self {
            buckets: window
                .dates()
                .iter()
                .map(|&date| (date, DailyBucket::new(date)))
                .collect(),
            active_dates: BTreeMap::new(),
        };

        let mut outside = 0usize;
        for record in records {
            // Both checks are kept: the timestamp span and the date membership.
            if !window.contains(record.timestamp) || !window.contains_date(record.date()) {
                outside += 1;
                continue;
            }
            tally.add(record);
        }

        if outside > 0 {
            debug!(outside, "records outside the window ignored");
        }
        tally
    }

    fn add(&mut self, record: &MessageRecord) {
        let date = record.date();
        let Some(bucket) = self.buckets.get_mut(&date) else {
            return;
        };

        let counts_as_active = match (record.is_system, record.action) {
            (true, Some(SystemAction::Joined)) => {
                bucket.new_users.insert(record.author.clone());
                true
            }
            (true, _) => false,
            (false, _) => true,
        };

        if counts_as_active {
            trace!(author = %record.author, %date, "active");
            bucket.active_users.insert(record.author.clone());
            self.active_dates
                .entry(record.author.clone())
                .or_default()
                .insert(date);
        }
    }

    fn into_result(self, window: &ActivityWindow, min_active_days: u32) -> AnalyticsResult {
        let daily_data: Vec<DailyActivity> =
            self.buckets.values().map(DailyBucket::to_activity).collect();

        let threshold = usize::try_from(min_active_days).unwrap_or(usize::MAX);
        let regular_users: Vec<String> = self
            .active_dates
            .iter()
            .filter(|(_, dates)| dates.len() >= threshold)
            .map(|(author, _)| author.clone())
            .collect();

        let total_new_users = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.new_users.iter())
            .collect::<BTreeSet<_>>()
            .len();

        let active_sum: usize = daily_data.iter().map(|day| day.active_users).sum();

        let summary = ActivitySummary {
            total_active_users: self.active_dates.len(),
            total_new_users,
            avg_daily_active_users: round_tenth(active_sum, window.len()),
            regular_user_count: regular_users.len(),
        };

        AnalyticsResult {
            daily_data,
            regular_users,
            summary,
        }
    }
}

/// `sum / days`, rounded to one decimal place.
fn round_tenth(sum: usize, days: usize) -> f64 {
    if days == 0 {
        return 0.0;
    }
    let mean = sum as f64 / days as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    /// A timestamp `back` days before `today()` at the given hour.
    fn at(back: u64, hour: u32) -> NaiveDateTime {
        today()
            .checked_sub_days(chrono::Days::new(back))
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn aggregator() -> ActivityAggregator {
        ActivityAggregator::with_config(AnalyticsConfig::new().with_today(today()))
    }

    fn say(back: u64, author: &str) -> MessageRecord {
        MessageRecord::regular(at(back, 10), author, "hi")
    }

    fn join(back: u64, author: &str) -> MessageRecord {
        MessageRecord::system(at(back, 9), author, format!("{author} joined"), SystemAction::Joined)
    }

    fn leave(back: u64, author: &str) -> MessageRecord {
        MessageRecord::system(at(back, 9), author, format!("{author} left"), SystemAction::Left)
    }

    #[test]
    fn test_empty_is_all_zero() {
        let result = aggregator().compute(&[]);
        assert_eq!(result.daily_data.len(), 7);
        assert_eq!(result.daily_data[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(result.daily_data[6].date, today());
        assert!(result.daily_data.iter().all(|d| d.active_users == 0 && d.new_users == 0));
        assert!(result.regular_users.is_empty());
        assert_eq!(result.summary, ActivitySummary::default());
    }

    #[test]
    fn test_outside_window_matches_empty() {
        let tomorrow = today().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        let records = vec![
            say(7, "Alice"),
            say(30, "Bob"),
            MessageRecord::regular(tomorrow, "Dave", "tomorrow"),
        ];

        assert_eq!(aggregator().compute(&records), aggregator().compute(&[]));
    }

    #[test]
    fn test_daily_counts() {
        let records = vec![
            say(0, "Alice"),
            say(0, "Alice"),
            say(0, "Bob"),
            say(1, "Alice"),
            join(1, "Carol"),
            leave(1, "Dave"),
        ];
        let result = aggregator().compute(&records);

        let today_entry = &result.daily_data[6];
        assert_eq!(today_entry.active_users, 2);
        assert_eq!(today_entry.new_users, 0);

        let yesterday = &result.daily_data[5];
        assert_eq!(yesterday.active_users, 2);
        assert_eq!(yesterday.new_users, 1);

        assert_eq!(result.summary.total_active_users, 3);
        assert_eq!(result.summary.total_new_users, 1);
    }

    #[test]
    fn test_left_notice_counts_nothing() {
        let result = aggregator().compute(&[leave(0, "Dave")]);
        assert!(result.is_quiet());
        assert_eq!(result.daily_data[6].active_users, 0);
    }

    #[test]
    fn test_join_counts_as_active() {
        let result = aggregator().compute(&[join(2, "Eve")]);
        assert_eq!(result.daily_data[4].active_users, 1);
        assert_eq!(result.daily_data[4].new_users, 1);
        assert_eq!(result.summary.total_active_users, 1);
    }

    #[test]
    fn test_four_days_is_regular_three_is_not() {
        let mut records = Vec::new();
        for back in 0..4 {
            records.push(say(back, "Four"));
        }
        for back in 0..3 {
            records.push(say(back, "Three"));
        }
        let result = aggregator().compute(&records);

        assert_eq!(result.regular_users, vec!["Four".to_string()]);
        assert_eq!(result.summary.regular_user_count, 1);
    }

    #[test]
    fn test_regulars_sorted() {
        let mut records = Vec::new();
        for back in 0..5 {
            records.push(say(back, "zed"));
            records.push(say(back, "Amy"));
            records.push(say(back, "bob"));
        }
        let result = aggregator().compute(&records);
        assert_eq!(result.regular_users, vec!["Amy", "bob", "zed"]);
    }

    #[test]
    fn test_same_day_repeats_count_once() {
        let records: Vec<_> = (0..6).map(|_| say(3, "Alice")).collect();
        let result = aggregator().compute(&records);
        assert_eq!(result.daily_data[3].active_users, 1);
        assert!(result.regular_users.is_empty());
    }

    #[test]
    fn test_average_rounding() {
        // 1 + 1 + 2 = 4 over 7 days, 0.571.. rounds to 0.6
        let records = vec![say(0, "A"), say(0, "B"), say(1, "A"), say(2, "A")];
        let result = aggregator().compute(&records);
        assert!((result.summary.avg_daily_active_users - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_edges() {
        let first = today()
            .checked_sub_days(chrono::Days::new(6))
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let last = today().and_hms_opt(23, 59, 59).unwrap();
        let before = first - chrono::Duration::seconds(1);

        let records = vec![
            MessageRecord::regular(first, "Early", "x"),
            MessageRecord::regular(last, "Late", "x"),
            MessageRecord::regular(before, "TooEarly", "x"),
        ];
        let result = aggregator().compute(&records);
        assert_eq!(result.daily_data[0].active_users, 1);
        assert_eq!(result.daily_data[6].active_users, 1);
        assert_eq!(result.summary.total_active_users, 2);
    }

    #[test]
    fn test_custom_window() {
        let config = AnalyticsConfig::new()
            .with_today(today())
            .with_window_days(3)
            .with_min_active_days(2);
        let records = vec![say(0, "A"), say(1, "A"), say(4, "B")];
        let result = ActivityAggregator::with_config(config).compute(&records);

        assert_eq!(result.daily_data.len(), 3);
        assert_eq!(result.regular_users, vec!["A"]);
        assert_eq!(result.summary.total_active_users, 1);
    }

    #[test]
    fn test_round_tenth() {
        assert!((round_tenth(0, 7) - 0.0).abs() < f64::EPSILON);
        assert!((round_tenth(7, 7) - 1.0).abs() < f64::EPSILON);
        assert!((round_tenth(10, 7) - 1.4).abs() < f64::EPSILON);
        assert!((round_tenth(3, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ActivityAggregator>();
    }
}
