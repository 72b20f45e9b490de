//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the full report with the dashboard wire keys - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - one row per window day, semicolon delimited - requires `csv-output` feature
//! - [`write_text`] / [`to_text`] - a plain summary table for terminals
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatpulse::Result<()> {
//! use chatpulse::output::{to_csv, to_json, to_text};
//! use chatpulse::report::analyze;
//!
//! let report = analyze("[01/01/2024, 09:00 AM] Alice: Hello")?;
//!
//! let json = to_json(&report)?;
//! assert!(json.contains("\"success\": true"));
//!
//! let csv = to_csv(&report)?;
//! assert!(csv.starts_with("date;active_users;new_users"));
//!
//! let text = to_text(&report);
//! assert!(text.contains("Total messages: 1"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
