//! Synthetic WhatsApp transcript generator for stress testing chatpulse.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [days]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 heavy_chat.txt 14
//!
//! Messages are spread evenly over the last `days` days ending now, so the
//! weekly report over the output always has activity. Header layouts rotate
//! between Android and iOS styles; multi-line bodies, membership notices and
//! garbage lines are mixed in.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const MEMBERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Dave Smith",
    "Eve",
    "Frank O'Brien",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "🔥Fire🔥",
    "+1 555 0100",
];

const NEWCOMERS: &[&str] = &["Grace", "Heidi", "Ivan Petrov", "Judy", "Mallory"];

const BODIES: &[&str] = &[
    "Good morning everyone",
    "Has anyone seen the schedule?",
    "See you at 10:30: main hall",
    "Кириллица: Привет мир!",
    "日本語: こんにちは",
    "Mixed: Hello Привет 你好 🌍",
    "<Media omitted>",
    "https://example.com/some/link?x=1&y=2",
    "😂😂😂",
    "ok",
];

/// Header layouts in rotation: Android dashed and iOS bracketed, 12/24h.
const HEADERS: &[fn(NaiveDateTime) -> String] = &[
    ios_twelve_hour,
    android_short_year,
    ios_iso_narrow_space,
    android_year_first,
];

fn ios_twelve_hour(ts: NaiveDateTime) -> String {
    format!("[{}] ", ts.format("%d/%m/%Y, %-I:%M:%S %p"))
}

fn android_short_year(ts: NaiveDateTime) -> String {
    format!("{} - ", ts.format("%d/%m/%y, %H:%M"))
}

fn ios_iso_narrow_space(ts: NaiveDateTime) -> String {
    format!("[{}\u{202f}{}] ", ts.format("%Y-%m-%d, %-I:%M"), ts.format("%p"))
}

fn android_year_first(ts: NaiveDateTime) -> String {
    format!("{} - ", ts.format("%Y/%m/%d, %H:%M:%S"))
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let days: i64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(7).max(1);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Days:     {}", days);
    println!();

    if let Err(e) = generate(count, output, days) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(count: usize, output: &str, days: i64) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let end = Local::now().naive_local();
    let span = Duration::days(days).num_seconds();
    let first = end - Duration::seconds(span);
    let step = span / i64::try_from(count.max(1)).unwrap_or(i64::MAX);

    for i in 0..count {
        let offset = step * i64::try_from(i).unwrap_or(i64::MAX);
        let ts = first + Duration::seconds(offset);
        let header = HEADERS[i % HEADERS.len()](ts);

        let line = generate_entry(&mut rng, i, &header);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasionally insert garbage lines to test robustness
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes())?;
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn generate_entry(rng: &mut impl Rng, index: usize, header: &str) -> String {
    match index % 50 {
        // Membership notices
        0 => {
            let who = NEWCOMERS.choose(rng).copied().unwrap_or("Grace");
            format!("{header}{who} joined using this group's invite link\n")
        }
        1 => {
            let who = MEMBERS.choose(rng).copied().unwrap_or("Alice");
            let whom = NEWCOMERS.choose(rng).copied().unwrap_or("Heidi");
            format!("{header}{who} added {whom}\n")
        }
        2 => {
            let who = NEWCOMERS.choose(rng).copied().unwrap_or("Judy");
            format!("{header}{who} left\n")
        }

        // Multi-line message
        3..=7 => {
            let who = MEMBERS.choose(rng).copied().unwrap_or("Bob");
            let lines = rng.gen_range(2..=5);
            let mut body = format!("{header}{who}: Multi-line message #{index}\n");
            for n in 1..lines {
                body.push_str(&format!("  line {n} of {lines}\n"));
            }
            body
        }

        // Regular message
        _ => {
            let who = MEMBERS.choose(rng).copied().unwrap_or("Carol");
            let text = BODIES.choose(rng).copied().unwrap_or("ok");
            format!("{header}{who}: {text}\n")
        }
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[99/99/9999, 10:00 AM] Ghost: unreadable date\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        3 => "\n".to_string(),
        4 => "Messages and calls are end-to-end encrypted.\n".to_string(),
        _ => "garbage\n".to_string(),
    }
}
