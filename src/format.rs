//! Output format selection.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::format::{OutputFormat, to_format_string};
//! use chatpulse::report::analyze;
//!
//! let report = analyze("[01/01/2024, 09:00 AM] Alice: Hello")?;
//!
//! // Format detection from extension
//! let format = OutputFormat::from_path("weekly.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//!
//! let csv = to_format_string(&report, format)?;
//! assert!(csv.starts_with("date;"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatpulseError, Result};
use crate::report::AnalysisReport;

/// Output format for analysis reports.
///
/// - [`Json`](OutputFormat::Json) - the full report, dashboard wire format
/// - [`Csv`](OutputFormat::Csv) - daily rows only, for spreadsheets
/// - [`Text`](OutputFormat::Text) - human-readable summary
///
/// # Example
///
/// ```rust
/// use chatpulse::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON report (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter, one row per day
    Csv,

    /// Plain-text table and summary
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv, OutputFormat::Text]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatpulse::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.xlsx").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(ChatpulseError::unknown_format(
                format!(".{ext}"),
                &["json", "csv", "txt"],
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(report: &AnalysisReport, path: &str, format: OutputFormat) -> Result<()> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(report, path),
        OutputFormat::Text => crate::output::write_text(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts the report to a string in the specified format.
pub fn to_format_string(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(report),
        OutputFormat::Text => Ok(crate::output::to_text(report)),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatpulseError {
    let feature = if format == OutputFormat::Csv {
        "csv-output"
    } else {
        "json-output"
    };
    ChatpulseError::invalid_config(format!(
        "Output format {format} requires the '{feature}' feature to be enabled"
    ))
}
