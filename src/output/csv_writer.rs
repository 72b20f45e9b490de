//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::analytics::DailyActivity;
use crate::error::Result;
use crate::report::AnalysisReport;

const HEADER: [&str; 3] = ["date", "active_users", "new_users"];

/// Writes the daily rows to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `date`, `active_users`, `new_users`
/// - One row per window day, oldest first
pub fn write_csv(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(file, &report.data.daily_data)
}

/// Converts the daily rows to a CSV string.
pub fn to_csv(report: &AnalysisReport) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &report.data.daily_data)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(sink: W, days: &[DailyActivity]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for day in days {
        writer.write_record([
            day.date_display.clone(),
            day.active_users.to_string(),
            day.new_users.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
