//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatpulse::ChatpulseError;
use chatpulse::cli::Args;
use chatpulse::format::{OutputFormat, to_format_string, write_to_format};
use chatpulse::report::{AnalysisReport, Analyzer};

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_directive());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the default level.
fn setup_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: &Args) -> Result<(), ChatpulseError> {
    let config = args.report_config()?;
    let analyzer = Analyzer::new(config)?;
    let format: OutputFormat = args.format.into();

    let Some(output_path) = args.output.as_deref() else {
        // Bare report on stdout so it can be piped.
        let report = analyzer.analyze_file(&args.input)?;
        print!("{}", ensure_newline(to_format_string(&report, format)?));
        return Ok(());
    };

    let total_start = Instant::now();

    println!("📊 chatpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    let window = analyzer.aggregator().window();
    println!(
        "📅 Window:  {} .. {} ({} days)",
        window.first_day(),
        window.last_day(),
        window.len()
    );
    println!();

    println!("⏳ Analyzing...");
    let report = analyzer.analyze_file(&args.input)?;
    println!(
        "   Parsed {} messages ({:.2}s)",
        report.total_messages,
        total_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    write_to_format(&report, output_path, format)?;

    println!();
    println!("✅ Done! Report saved to {}", output_path);

    print_summary(&report);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let stats = &report.stats;
    let summary = &report.data.summary;

    println!();
    println!("📊 Transcript:");
    println!(
        "   Messages:  {} ({} regular, {} notices)",
        stats.total, stats.regular, stats.system
    );
    println!("   Members:   {} distinct authors", stats.distinct_authors);
    if let (Some(first), Some(last)) = (stats.first_timestamp, stats.last_timestamp) {
        println!("   Span:      {} .. {}", first, last);
    }

    println!();
    println!("👥 Window:");
    println!("   Active:    {}", summary.total_active_users);
    println!("   New:       {}", summary.total_new_users);
    println!("   Avg/day:   {:.1}", summary.avg_daily_active_users);
    println!("   Regulars:  {}", summary.regular_user_count);
    if let Some(peak) = report.data.peak_day() {
        println!("   Peak day:  {} ({} active)", peak.date_display, peak.active_users);
    }
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
