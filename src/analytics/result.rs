//! Analytics output types.
//!
//! Serialized field names follow the report wire format consumed by the
//! dashboard (`daily_data`, `users_active_4plus_days`, `summary`).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::window::ActivityWindow;

/// Authors seen on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    /// The calendar day.
    pub date: NaiveDate,
    /// Authors who wrote a message or joined that day.
    pub active_users: BTreeSet<String>,
    /// Authors who joined that day.
    pub new_users: BTreeSet<String>,
}

impl DailyBucket {
    /// Creates an empty bucket for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            active_users: BTreeSet::new(),
            new_users: BTreeSet::new(),
        }
    }

    /// Collapses the bucket into its counts.
    pub fn to_activity(&self) -> DailyActivity {
        DailyActivity::new(self.date, self.active_users.len(), self.new_users.len())
    }
}

/// Per-day counts in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// ISO date.
    pub date: NaiveDate,
    /// Display form of the date (`YYYY-MM-DD`).
    pub date_display: String,
    /// Distinct active authors.
    pub active_users: usize,
    /// Distinct authors who joined.
    pub new_users: usize,
}

impl DailyActivity {
    /// Creates an entry for `date`.
    pub fn new(date: NaiveDate, active_users: usize, new_users: usize) -> Self {
        Self {
            date,
            date_display: date.format("%Y-%m-%d").to_string(),
            active_users,
            new_users,
        }
    }

    /// A day with no activity.
    pub fn zero(date: NaiveDate) -> Self {
        Self::new(date, 0, 0)
    }
}

/// Window-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Distinct authors active on at least one day.
    pub total_active_users: usize,
    /// Distinct authors who joined during the window.
    pub total_new_users: usize,
    /// Mean of the daily active counts, one decimal.
    pub avg_daily_active_users: f64,
    /// Length of the regulars list.
    #[serde(rename = "users_active_4plus_days_count")]
    pub regular_user_count: usize,
}

impl Default for ActivitySummary {
    fn default() -> Self {
        Self {
            total_active_users: 0,
            total_new_users: 0,
            avg_daily_active_users: 0.0,
            regular_user_count: 0,
        }
    }
}

/// The full analytics result for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// One entry per window day, oldest first.
    pub daily_data: Vec<DailyActivity>,
    /// Authors active on enough distinct days, sorted ascending.
    #[serde(rename = "users_active_4plus_days")]
    pub regular_users: Vec<String>,
    /// Window-wide totals.
    pub summary: ActivitySummary,
}

impl AnalyticsResult {
    /// The all-zero result for `window`.
    pub fn empty(window: &ActivityWindow) -> Self {
        Self {
            daily_data: window.dates().iter().copied().map(DailyActivity::zero).collect(),
            regular_users: Vec::new(),
            summary: ActivitySummary::default(),
        }
    }

    /// Returns `true` if no author was active in the window.
    pub fn is_quiet(&self) -> bool {
        self.summary.total_active_users == 0 && self.summary.total_new_users == 0
    }

    /// Returns the busiest day, the earliest one on ties.
    pub fn peak_day(&self) -> Option<&DailyActivity> {
        self.daily_data
            .iter()
            .filter(|day| day.active_users > 0)
            .fold(None, |best: Option<&DailyActivity>, day| match best {
                Some(b) if b.active_users >= day.active_users => Some(b),
                _ => Some(day),
            })
    }
}
