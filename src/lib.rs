//! # Chatpulse
//!
//! Weekly activity analytics for WhatsApp TXT chat exports.
//!
//! ## Overview
//!
//! Chatpulse reads the plain-text transcript WhatsApp produces with
//! "Export chat", recovers a clean sequence of messages and membership
//! notices from it, and summarizes the last seven days:
//! - **Daily activity**: distinct active and newly joined members per day
//! - **Regulars**: members active on 4 or more of the 7 days
//! - **Summary**: window totals and the mean daily active count
//!
//! The parser tolerates the date/time layouts of both Android and iOS
//! exports, multi-line messages and join/leave notices. Lines it cannot
//! read are skipped, never reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "[01/01/2024, 09:00 AM] Alice: Hello\n\
//!                 [01/01/2024, 09:05 AM] Bob: Hi Alice\n\
//!                 [01/01/2024, 09:10 AM] Carol joined";
//!
//!     let report = analyze(text)?;
//!     assert_eq!(report.total_messages, 3);
//!     assert_eq!(report.data.daily_data.len(), 7);
//!     Ok(())
//! }
//! ```
//!
//! ## Pinning the Window
//!
//! The window ends on the local date by default. Pin it for reproducible
//! reports:
//!
//! ```rust
//! use chatpulse::prelude::*;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatpulse::Result<()> {
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let config = ReportConfig::new().with_analytics(AnalyticsConfig::new().with_today(today));
//!
//! let report = Analyzer::new(config)?.analyze_str("[01/01/2024, 09:00 AM] Alice: Hello")?;
//! assert_eq!(report.data.summary.total_active_users, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`TranscriptParser`](parser::TranscriptParser), the line state machine
//! - [`parsing`]: header patterns, date/time layouts, notice heuristics
//! - [`analytics`]: [`ActivityWindow`](analytics::ActivityWindow),
//!   [`ActivityAggregator`](analytics::ActivityAggregator), result types, [`RecordStats`](analytics::RecordStats)
//! - [`report`]: [`Analyzer`](report::Analyzer), [`analyze`](report::analyze), [`AnalysisReport`](report::AnalysisReport)
//! - [`config`]: parser, analytics and report settings
//! - [`format`] / [`output`]: JSON, CSV and text writers
//! - [`cli`]: CLI arguments (feature `cli`)
//! - [`error`]: unified error types ([`ChatpulseError`], [`Result`])
//! - [`prelude`]: convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpulseError, Result};
pub use record::{MessageRecord, SystemAction};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::{MessageRecord, SystemAction};

    // Error types
    pub use crate::error::{ChatpulseError, Result};

    // Configuration
    pub use crate::config::{AnalyticsConfig, ParserConfig, ReportConfig};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Analytics
    pub use crate::analytics::{
        ActivityAggregator, ActivitySummary, ActivityWindow, AnalyticsResult, DailyActivity,
        RecordStats, compute,
    };

    // Report boundary
    pub use crate::report::{AnalysisReport, Analyzer, analyze, analyze_bytes};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
    pub use crate::output::{to_text, write_text};
}
