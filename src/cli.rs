//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::report_config`] turns parsed flags into the library's
//! [`ReportConfig`], so the binary holds no analysis settings of its own.
//!
//! ```rust
//! use chatpulse::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatpulse", "chat.txt", "--today", "2024-01-07"]);
//! let config = args.report_config().unwrap();
//! assert_eq!(config.analytics.window_days, 7);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{
    AnalyticsConfig, DEFAULT_MAX_INPUT_BYTES, DEFAULT_MIN_ACTIVE_DAYS, DEFAULT_WINDOW_DAYS,
    ParserConfig, ReportConfig,
};
use crate::error::Result;

/// Weekly activity report for a WhatsApp TXT chat export:
/// daily active and new members, and the regulars.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse chat.txt
    chatpulse chat.txt -o weekly.json
    chatpulse chat.txt -f csv -o weekly.csv
    chatpulse chat.txt -f text --today 2024-01-07
    chatpulse chat.txt --window-days 30 --min-active-days 10")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Last day of the window (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Length of the window in days
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Active days needed to count as a regular
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MIN_ACTIVE_DAYS)]
    pub min_active_days: u32,

    /// Drop join/leave notices (nobody is counted as new)
    #[arg(long)]
    pub skip_system: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_size: usize,

    /// Log parser and aggregator decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the library configuration from the flags.
    pub fn report_config(&self) -> Result<ReportConfig> {
        let mut analytics = AnalyticsConfig::new()
            .with_window_days(self.window_days)
            .with_min_active_days(self.min_active_days);
        if let Some(ref today) = self.today {
            analytics = analytics.with_today_str(today)?;
        }
        analytics.validate()?;

        Ok(ReportConfig::new()
            .with_max_input_bytes(self.max_size)
            .with_parser(ParserConfig::new().with_system_notices(!self.skip_system))
            .with_analytics(analytics))
    }

    /// Default `tracing` filter directive for this run.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full JSON report (default)
    #[default]
    Json,

    /// Daily rows, semicolon delimited
    Csv,

    /// Human-readable summary
    #[value(alias = "txt")]
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Text => crate::format::OutputFormat::Text,
        }
    }
}
