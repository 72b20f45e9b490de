//! Example: Using chatpulse as a library
//!
//! This example demonstrates how to use chatpulse in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatpulse::prelude::*;
use chrono::NaiveDate;

const CHAT: &str = "\
[01/01/2024, 09:00 AM] Alice: Happy new year!
01/01/2024, 10:15 - Bob: Same to you
and many more
[02/01/2024, 08:00 AM] Alice: Morning
2/1/24, 21:30 - Carol joined using this group's invite link
[2024-01-03, 7:45 PM] Alice: Anyone around?
[04/01/2024, 12:05 PM] Carol: Sure
[05/01/2024, 6:00 pm] Alice: Evening all
05/01/2024, 18:30 - Dave left
[07/01/2024, 9:01 AM] Carol: Still here
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatpulse Library Usage Examples ===\n");

    // Example 1: Parse a transcript
    println!("1. Parsing a transcript:");
    let records = parse(CHAT);

    for record in &records {
        let kind = match record.action {
            Some(action) => format!("[{}]", action),
            None => "[msg]".to_string(),
        };
        println!(
            "   {} {:<7} {}: {}",
            record.timestamp,
            kind,
            record.author,
            record.body.replace('\n', " | ")
        );
    }

    // Example 2: Transcript statistics
    println!("\n2. Transcript statistics:");
    let stats = RecordStats::from_records(&records);
    println!("   Records: {} ({} notices)", stats.total, stats.system);
    println!("   Authors: {}", stats.distinct_authors);
    println!("   Notices: {:.1}%", stats.system_ratio());

    // Example 3: Weekly activity with a pinned window
    println!("\n3. Weekly activity (window ending 2024-01-07):");
    let today = NaiveDate::from_ymd_opt(2024, 1, 7).ok_or("bad date")?;
    let aggregator = ActivityAggregator::with_config(AnalyticsConfig::new().with_today(today));
    let result = aggregator.compute(&records);

    for day in &result.daily_data {
        println!(
            "   {}  active {}  new {}",
            day.date_display, day.active_users, day.new_users
        );
    }
    println!("   Regulars: {:?}", result.regular_users);

    // Example 4: Custom thresholds
    println!("\n4. Three-day window, regulars active on 2+ days:");
    let custom = AnalyticsConfig::new()
        .with_today(today)
        .with_window_days(3)
        .with_min_active_days(2);
    custom.validate()?;
    let result = ActivityAggregator::with_config(custom).compute(&records);
    println!("   Days: {}", result.daily_data.len());
    println!("   Regulars: {:?}", result.regular_users);

    // Example 5: Ignoring membership notices
    println!("\n5. Parsing without notices:");
    let parser = TranscriptParser::with_config(ParserConfig::new().with_system_notices(false));
    println!("   Records: {}", parser.parse(CHAT).len());

    // Example 6: Full report
    println!("\n6. Full report as JSON:");
    let config = ReportConfig::new().with_analytics(AnalyticsConfig::new().with_today(today));
    let report = Analyzer::new(config)?.analyze_str(CHAT)?;
    println!("{}", to_format_string(&report, OutputFormat::Json)?);

    // Example 7: Human-readable summary
    println!("\n7. Text summary:");
    print!("{}", to_text(&report));

    // Example 8: Error handling
    println!("\n8. Error handling:");
    match analyze("nothing to see here") {
        Ok(_) => println!("   Unexpected success"),
        Err(e) if e.is_no_messages() => println!("   No messages: {}", e),
        Err(e) => println!("   Other error: {}", e),
    }

    println!("\n=== Examples complete! ===");
    Ok(())
}
