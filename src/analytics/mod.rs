//! Activity analytics over parsed records.
//!
//! - [`ActivityWindow`]: the trailing run of calendar days ending today
//! - [`ActivityAggregator`]: per-day active/new counts, regulars and summary
//! - [`RecordStats`]: window-independent counts over the whole transcript

pub mod aggregator;
pub mod result;
pub mod stats;
pub mod window;

pub use aggregator::{ActivityAggregator, compute};
pub use result::{ActivitySummary, AnalyticsResult, DailyActivity, DailyBucket};
pub use stats::RecordStats;
pub use window::ActivityWindow;
