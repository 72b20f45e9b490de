//! The analysis entry point: transcript in, weekly report out.
//!
//! [`Analyzer`] runs the parser and the aggregator back to back and wraps
//! the result in an [`AnalysisReport`], whose JSON form is the dashboard
//! response body:
//!
//! ```json
//! {
//!   "success": true,
//!   "data": { "daily_data": [...], "users_active_4plus_days": [...], "summary": {...} },
//!   "total_messages": 42
//! }
//! ```
//!
//! The only failures are a transcript with no readable messages, input
//! over the size cap, and I/O errors when reading a file.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::report::analyze;
//!
//! # fn main() -> chatpulse::Result<()> {
//! let report = analyze("[01/01/2024, 09:00 AM] Alice: Hello")?;
//! assert!(report.success);
//! assert_eq!(report.total_messages, 1);
//!
//! assert!(analyze("no headers here").unwrap_err().is_no_messages());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analytics::{ActivityAggregator, AnalyticsResult, RecordStats};
use crate::config::ReportConfig;
use crate::error::{ChatpulseError, Result};
use crate::parser::TranscriptParser;
use crate::record::MessageRecord;

/// A successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Always `true`; failures are returned as errors instead.
    pub success: bool,
    /// Windowed activity analytics.
    pub data: AnalyticsResult,
    /// Number of records parsed from the whole transcript.
    pub total_messages: usize,
    /// Whole-transcript counts. Not part of the wire format.
    #[serde(skip)]
    pub stats: RecordStats,
}

impl AnalysisReport {
    fn new(data: AnalyticsResult, records: &[MessageRecord]) -> Self {
        Self {
            success: true,
            data,
            total_messages: records.len(),
            stats: RecordStats::from_records(records),
        }
    }
}

/// Parser plus aggregator with validated settings.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::{AnalyticsConfig, ReportConfig};
/// use chatpulse::report::Analyzer;
/// use chrono::NaiveDate;
///
/// # fn main() -> chatpulse::Result<()> {
/// let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let config = ReportConfig::new().with_analytics(AnalyticsConfig::new().with_today(today));
/// let analyzer = Analyzer::new(config)?;
///
/// let report = analyzer.analyze_str("[07/01/2024, 09:00] Alice: morning")?;
/// assert_eq!(report.data.summary.total_active_users, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    max_input_bytes: usize,
    parser: TranscriptParser,
    aggregator: ActivityAggregator,
}

impl Analyzer {
    /// Creates an analyzer, rejecting out-of-range settings.
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.analytics.validate()?;
        Ok(Self {
            max_input_bytes: config.max_input_bytes,
            parser: TranscriptParser::with_config(config.parser),
            aggregator: ActivityAggregator::with_config(config.analytics),
        })
    }

    /// Returns the parser in use.
    pub fn parser(&self) -> &TranscriptParser {
        &self.parser
    }

    /// Returns the aggregator in use.
    pub fn aggregator(&self) -> &ActivityAggregator {
        &self.aggregator
    }

    /// Analyzes decoded transcript text.
    ///
    /// Text input is not subject to the size cap.
    pub fn analyze_str(&self, text: &str) -> Result<AnalysisReport> {
        let records = self.parser.parse(text);
        self.report(&records)
    }

    /// Analyzes raw bytes, decoding invalid UTF-8 lossily.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisReport> {
        if bytes.len() > self.max_input_bytes {
            return Err(ChatpulseError::input_too_large(
                self.max_input_bytes,
                bytes.len(),
            ));
        }
        debug!(bytes = bytes.len(), "decoding transcript");
        let records = self.parser.parse_bytes(bytes);
        self.report(&records)
    }

    /// Reads and analyzes a transcript file.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        let size = fs::metadata(path)?.len();
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        if size > self.max_input_bytes {
            return Err(ChatpulseError::input_too_large(self.max_input_bytes, size));
        }
        let bytes = fs::read(path)?;
        self.analyze_bytes(&bytes)
    }

    fn report(&self, records: &[MessageRecord]) -> Result<AnalysisReport> {
        if records.is_empty() {
            return Err(ChatpulseError::NoMessages);
        }
        let data = self.aggregator.compute(records);
        info!(
            total_messages = records.len(),
            active = data.summary.total_active_users,
            "analysis complete"
        );
        Ok(AnalysisReport::new(data, records))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            max_input_bytes: ReportConfig::default().max_input_bytes,
            parser: TranscriptParser::new(),
            aggregator: ActivityAggregator::new(),
        }
    }
}

/// Analyzes transcript text with default settings.
pub fn analyze(text: &str) -> Result<AnalysisReport> {
    Analyzer::default().analyze_str(text)
}

/// Analyzes raw transcript bytes with the given settings.
pub fn analyze_bytes(bytes: &[u8], config: &ReportConfig) -> Result<AnalysisReport> {
    Analyzer::new(config.clone())?.analyze_bytes(bytes)
}
