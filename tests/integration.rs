//! Integration tests: transcript text through parser, aggregator and report.

use chatpulse::analytics::{ActivityAggregator, RecordStats};
use chatpulse::config::{AnalyticsConfig, ParserConfig, ReportConfig};
use chatpulse::parser::TranscriptParser;
use chatpulse::prelude::*;
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

/// One week of a small group, 1-7 January 2024, in mixed export layouts.
///
/// Expected activity per day (active / new):
/// 1: Alice, Bob (2/0)   2: Alice, Carol (2/1)   3: Alice (1/0)
/// 4: Bob, Carol (2/0)   5: Alice (1/0)          6: Carol (1/0)
/// 7: Bob, Carol (2/0)
const WEEK: &str = "\
[25/12/2023, 18:00:00] Frank: Merry Christmas
[01/01/2024, 09:00:00 AM] Alice: Happy new year!
01/01/2024, 10:15 - Bob: Same to you
and many more
[99/99/9999, 10:00 AM] Ghost: this header cannot be read
this line belongs to nobody
[02/01/2024, 08:00 AM] Alice: Morning
2/1/24, 21:30 - Carol joined using this group's invite link
[2024-01-03, 7:45 PM] Alice: Anyone around?
2024/01/04, 12:00:00 - Bob: Lunch?
[04/01/2024, 12:05 PM] Carol: Sure
[05/01/2024, 6:00 pm] Alice: Evening all
05/01/2024, 18:30 - Dave left
[06/01/2024, 11:11 AM] Carol: Quiet day
[07/01/2024, 9:00 AM] Bob: Last one
[07/01/2024, 9:01 AM] Carol: Not quite
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn week_config() -> ReportConfig {
    ReportConfig::new().with_analytics(AnalyticsConfig::new().with_today(date(2024, 1, 7)))
}

// =========================================================================
// Parser
// =========================================================================

#[test]
fn test_parse_week_records() {
    let records = TranscriptParser::new().parse(WEEK);
    assert_eq!(records.len(), 13);

    assert_eq!(records[0].author, "Frank");
    assert_eq!(records[2].author, "Bob");
    assert_eq!(records[2].body, "Same to you\nand many more");

    // The unreadable Ghost header and its orphan line leave no trace.
    assert!(records.iter().all(|r| r.author != "Ghost"));
    assert!(records.iter().all(|r| !r.body.contains("nobody")));

    let carol_join = &records[4];
    assert!(carol_join.is_system);
    assert_eq!(carol_join.action, Some(SystemAction::Joined));
    assert_eq!(carol_join.author, "Carol");
    assert_eq!(carol_join.date(), date(2024, 1, 2));

    let dave = &records[9];
    assert_eq!(dave.action, Some(SystemAction::Left));
    assert_eq!(dave.author, "Dave");
}

#[test]
fn test_parse_mixed_layouts_to_same_day() {
    let records = parse(
        "[04/01/2024, 12:05 PM] A: x\n\
         2024/01/04, 12:00:00 - B: y\n\
         [2024-01-04, 1:00 AM] C: z\n\
         04/01/24, 23:59 - D: w",
    );
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.date() == date(2024, 1, 4)));
}

#[test]
fn test_record_stats_for_week() {
    let records = parse(WEEK);
    let stats = RecordStats::from_records(&records);

    assert_eq!(stats.total, 13);
    assert_eq!(stats.regular, 11);
    assert_eq!(stats.system, 2);
    assert_eq!(stats.joined, 1);
    assert_eq!(stats.left, 1);
    assert_eq!(stats.distinct_authors, 5);
    assert_eq!(
        stats.first_timestamp,
        Some(date(2023, 12, 25).and_hms_opt(18, 0, 0).unwrap())
    );
    assert_eq!(
        stats.last_timestamp,
        Some(date(2024, 1, 7).and_hms_opt(9, 1, 0).unwrap())
    );
}

// =========================================================================
// Analytics
// =========================================================================

#[test]
fn test_week_daily_data() {
    let report = Analyzer::new(week_config()).unwrap().analyze_str(WEEK).unwrap();
    let daily = &report.data.daily_data;

    let active: Vec<usize> = daily.iter().map(|d| d.active_users).collect();
    let new: Vec<usize> = daily.iter().map(|d| d.new_users).collect();
    assert_eq!(active, vec![2, 2, 1, 2, 1, 1, 2]);
    assert_eq!(new, vec![0, 1, 0, 0, 0, 0, 0]);

    assert_eq!(daily[0].date, date(2024, 1, 1));
    assert_eq!(daily[6].date, date(2024, 1, 7));
    assert_eq!(daily[6].date_display, "2024-01-07");
}

#[test]
fn test_week_summary() {
    let report = Analyzer::new(week_config()).unwrap().analyze_str(WEEK).unwrap();
    let data = &report.data;

    assert_eq!(report.total_messages, 13);
    // The join counts as one of Carol's four active days.
    assert_eq!(data.regular_users, vec!["Alice", "Carol"]);
    assert_eq!(data.summary.total_active_users, 3);
    assert_eq!(data.summary.total_new_users, 1);
    assert_eq!(data.summary.regular_user_count, 2);
    // 11 / 7 = 1.57
    assert!((data.summary.avg_daily_active_users - 1.6).abs() < f64::EPSILON);
}

#[test]
fn test_week_without_notices() {
    let config = week_config().with_parser(ParserConfig::new().with_system_notices(false));
    let report = Analyzer::new(config).unwrap().analyze_str(WEEK).unwrap();

    assert_eq!(report.total_messages, 11);
    assert_eq!(report.data.summary.total_new_users, 0);
    assert_eq!(report.data.daily_data[1].active_users, 1);
    assert_eq!(report.data.regular_users, vec!["Alice"]);
}

#[test]
fn test_window_moves_with_today() {
    // Ending on Jan 3 keeps Frank's Christmas message out and cuts Jan 4-7.
    let analytics = AnalyticsConfig::new().with_today(date(2024, 1, 3));
    let result = ActivityAggregator::with_config(analytics).compute(&parse(WEEK));

    assert_eq!(result.daily_data.first().unwrap().date, date(2023, 12, 28));
    assert_eq!(result.summary.total_active_users, 3);
    assert!(result.regular_users.is_empty());
}

#[test]
fn test_window_far_in_future_is_all_zero() {
    let analytics = AnalyticsConfig::new().with_today(date(2030, 6, 1));
    let aggregator = ActivityAggregator::with_config(analytics);

    assert_eq!(aggregator.compute(&parse(WEEK)), aggregator.compute(&[]));
}

#[test]
fn test_custom_thresholds() {
    let config = ReportConfig::new().with_analytics(
        AnalyticsConfig::new()
            .with_today(date(2024, 1, 7))
            .with_window_days(14)
            .with_min_active_days(3),
    );
    let report = Analyzer::new(config).unwrap().analyze_str(WEEK).unwrap();

    assert_eq!(report.data.daily_data.len(), 14);
    assert_eq!(report.data.regular_users, vec!["Alice", "Bob", "Carol"]);
    // Frank's Dec 25 message is inside a 14-day window ending Jan 7.
    assert_eq!(report.data.summary.total_active_users, 4);
}

// =========================================================================
// Report boundary
// =========================================================================

#[test]
fn test_round_trip_scenario() {
    let text = "[01/01/2024, 09:00 AM] Alice: Hello\n\
                [01/01/2024, 09:05 AM] Bob: Hi Alice\n\
                continued line\n\
                [01/01/2024, 09:10 AM] Carol joined";
    let records = parse(text);

    assert_eq!(records.len(), 3);
    assert_eq!((records[0].author.as_str(), records[0].body.as_str()), ("Alice", "Hello"));
    assert_eq!(
        (records[1].author.as_str(), records[1].body.as_str()),
        ("Bob", "Hi Alice\ncontinued line")
    );
    assert!(records[2].is_system);
    assert_eq!(records[2].author, "Carol");
    assert!(records[2].is_join());

    let report = analyze(text).unwrap();
    assert_eq!(report.total_messages, 3);
}

#[test]
fn test_analyze_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, WEEK).unwrap();

    let report = Analyzer::new(week_config()).unwrap().analyze_file(&path).unwrap();
    assert_eq!(report.total_messages, 13);
    assert_eq!(report.stats.distinct_authors, 5);
}

#[test]
fn test_parse_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, WEEK).unwrap();

    let records = TranscriptParser::new().parse_file(&path).unwrap();
    assert_eq!(records, parse(WEEK));
}

#[test]
fn test_analyze_bytes_matches_text() {
    let from_bytes = analyze_bytes(WEEK.as_bytes(), &week_config()).unwrap();
    let from_text = Analyzer::new(week_config()).unwrap().analyze_str(WEEK).unwrap();
    assert_eq!(from_bytes, from_text);
}

#[test]
fn test_no_messages_error_text() {
    let err = analyze("hello\nworld").unwrap_err();
    assert!(err.is_no_messages());
    assert_eq!(
        err.to_string(),
        "No valid messages found in the chat file. Please check the file format."
    );
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TranscriptParser>();
    assert_send_sync::<ActivityAggregator>();
    assert_send_sync::<Analyzer>();
}
