//! Configuration types for parsing, analytics and the report boundary.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Defaults reproduce the standard
//! weekly report: a 7-day window ending today, regulars active on 4+ days.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::{AnalyticsConfig, ParserConfig};
//! use chrono::NaiveDate;
//!
//! let parser = ParserConfig::new().with_system_notices(false);
//!
//! let analytics = AnalyticsConfig::new()
//!     .with_window_days(14)
//!     .with_today(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
//! assert!(analytics.validate().is_ok());
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ChatpulseError, Result};

/// Default analytics horizon in calendar days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest accepted analytics window in calendar days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Default number of distinct active days that makes a member a regular.
pub const DEFAULT_MIN_ACTIVE_DAYS: u32 = 4;

/// Default cap on raw input size (10MB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::ParserConfig;
///
/// let config = ParserConfig::new().with_system_notices(false);
/// assert!(!config.include_system_notices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Keep membership notices in the record stream (default: true)
    ///
    /// When disabled, notices still close the open message but are not
    /// emitted, so no member is ever counted as new.
    pub include_system_notices: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            include_system_notices: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether membership notices are emitted.
    #[must_use]
    pub fn with_system_notices(mut self, include: bool) -> Self {
        self.include_system_notices = include;
        self
    }
}

/// Configuration for the activity aggregator.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default();
/// assert_eq!(config.window_days, 7);
/// assert_eq!(config.min_active_days, 4);
/// assert!(config.today.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Length of the trailing window in calendar days (default: 7)
    pub window_days: u32,

    /// Distinct active days needed to be listed as a regular (default: 4)
    pub min_active_days: u32,

    /// Last day of the window. `None` means the local calendar date at
    /// computation time.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_active_days: DEFAULT_MIN_ACTIVE_DAYS,
            today: None,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    #[must_use]
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets the regular-member threshold.
    #[must_use]
    pub fn with_min_active_days(mut self, days: u32) -> Self {
        self.min_active_days = days;
        self
    }

    /// Pins the last day of the window.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Pins the last day of the window from a `YYYY-MM-DD` string.
    pub fn with_today_str(self, date_str: &str) -> Result<Self> {
        let today = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatpulseError::invalid_date(date_str))?;
        Ok(self.with_today(today))
    }

    /// Returns the pinned end date, or the local date right now.
    pub fn resolve_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Checks that all values are in range.
    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(ChatpulseError::invalid_config(
                "window_days must be at least 1",
            ));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(ChatpulseError::invalid_config(format!(
                "window_days must be at most {MAX_WINDOW_DAYS}"
            )));
        }
        if self.min_active_days == 0 {
            return Err(ChatpulseError::invalid_config(
                "min_active_days must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Configuration for the byte-oriented report entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reject raw input larger than this many bytes (default: 10MB)
    pub max_input_bytes: usize,

    /// Parser settings
    pub parser: ParserConfig,

    /// Aggregator settings
    pub analytics: AnalyticsConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            parser: ParserConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input size cap.
    #[must_use]
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Replaces the parser settings.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the aggregator settings.
    #[must_use]
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }
}
