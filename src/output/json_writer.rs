//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::report::AnalysisReport;

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "success": true,
///   "data": {
///     "daily_data": [{"date": "2024-01-01", "date_display": "2024-01-01", "active_users": 2, "new_users": 0}],
///     "users_active_4plus_days": ["Alice"],
///     "summary": {"total_active_users": 2, "total_new_users": 0, "avg_daily_active_users": 0.3, "users_active_4plus_days_count": 1}
///   },
///   "total_messages": 12
/// }
/// ```
pub fn write_json(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
