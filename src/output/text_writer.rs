//! Plain-text summary writer.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::report::AnalysisReport;

/// Writes the text summary to a file.
pub fn write_text(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(report).as_bytes())?;
    Ok(())
}

/// Renders the report as an aligned table followed by the summary.
pub fn to_text(report: &AnalysisReport) -> String {
    let data = &report.data;
    let mut out = String::new();

    let _ = writeln!(out, "{:<12} {:>8} {:>8}", "Date", "Active", "New");
    for day in &data.daily_data {
        let _ = writeln!(
            out,
            "{:<12} {:>8} {:>8}",
            day.date_display, day.active_users, day.new_users
        );
    }
    out.push('\n');

    let summary = &data.summary;
    let _ = writeln!(out, "Total messages: {}", report.total_messages);
    let _ = writeln!(out, "Active users: {}", summary.total_active_users);
    let _ = writeln!(out, "New users: {}", summary.total_new_users);
    let _ = writeln!(out, "Avg daily active: {:.1}", summary.avg_daily_active_users);
    let _ = writeln!(out, "Regulars: {}", summary.regular_user_count);
    for user in &data.regular_users {
        let _ = writeln!(out, "  - {user}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalyticsConfig, ReportConfig};
    use crate::report::Analyzer;
    use chrono::NaiveDate;

    #[test]
    fn test_to_text() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        let config = ReportConfig::new().with_analytics(AnalyticsConfig::new().with_today(today));
        let transcript = (1..=4)
            .map(|d| format!("[0{d}/01/2024, 08:00] Alice: day {d}"))
            .collect::<Vec<_>>()
            .join("\n");
        let report = Analyzer::new(config).unwrap().analyze_str(&transcript).unwrap();

        let text = to_text(&report);
        assert!(text.starts_with("Date"));
        assert!(text.contains("2024-01-04"));
        assert!(text.contains("Total messages: 4"));
        assert!(text.contains("Avg daily active: 0.6"));
        assert!(text.contains("Regulars: 1"));
        assert!(text.contains("  - Alice"));
    }
}
