//! WhatsApp TXT transcript parser.
//!
//! Turns loosely formatted export text into an ordered list of
//! [`MessageRecord`]s. Parsing is best-effort: lines that cannot be read are
//! dropped and logged at `trace` level, never reported as errors.
//!
//! Supported header layouts:
//! - Bracketed: `[15/01/2024, 10:30:45 AM] Sender: Message`
//! - Dashed: `15/01/2024, 10:30 - Sender: Message`
//!
//! # Example
//!
//! ```rust
//! use chatpulse::parser::TranscriptParser;
//!
//! let text = "[01/01/2024, 09:00 AM] Alice: Hello\n\
//!             [01/01/2024, 09:05 AM] Bob: Hi Alice\n\
//!             continued line\n\
//!             [01/01/2024, 09:10 AM] Carol joined";
//!
//! let records = TranscriptParser::new().parse(text);
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].body, "Hi Alice\ncontinued line");
//! assert!(records[2].is_system);
//! ```

use std::fs;
use std::mem;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::error::Result;
use crate::parsing::{Header, classify_notice, extract_notice_author, match_header, parse_timestamp};
use crate::record::MessageRecord;

/// Parser for WhatsApp TXT exports.
///
/// Holds only configuration; header patterns are compiled once per process.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::ParserConfig;
/// use chatpulse::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new().with_system_notices(false));
/// let records = parser.parse("[01/01/2024, 09:10 AM] Carol joined");
/// assert!(records.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text into records, in source order.
    pub fn parse(&self, text: &str) -> Vec<MessageRecord> {
        let mut run = ParseRun::new(&self.config);
        for (index, raw) in text.lines().enumerate() {
            run.feed(index + 1, raw);
        }
        run.finish()
    }

    /// Parses raw bytes, replacing invalid UTF-8 with U+FFFD.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Vec<MessageRecord> {
        self.parse(&String::from_utf8_lossy(bytes))
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        Ok(self.parse_bytes(&bytes))
    }
}

/// Parses transcript text with the default configuration.
pub fn parse(text: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse(text)
}

/// Whether a regular message is still absorbing continuation lines.
#[derive(Debug, Default)]
enum ParseState {
    #[default]
    Idle,
    Accumulating(MessageRecord),
}

impl ParseState {
    /// Closes the open record, if any, leaving the state idle.
    fn take(&mut self) -> Option<MessageRecord> {
        match mem::take(self) {
            ParseState::Accumulating(record) => Some(record),
            ParseState::Idle => None,
        }
    }
}

/// Counters for lines that produced nothing.
#[derive(Debug, Default)]
struct DropCounts {
    bad_timestamp: usize,
    no_author: usize,
    orphan: usize,
}

/// One pass over a transcript.
struct ParseRun<'c> {
    config: &'c ParserConfig,
    state: ParseState,
    records: Vec<MessageRecord>,
    dropped: DropCounts,
}

impl<'c> ParseRun<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            state: ParseState::Idle,
            records: Vec::new(),
            dropped: DropCounts::default(),
        }
    }

    fn feed(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        match match_header(line) {
            Some(header) => self.on_header(line_no, header),
            None => self.on_continuation(line_no, line),
        }
    }

    fn on_header(&mut self, line_no: usize, header: Header<'_>) {
        self.close_open();

        let Some(timestamp) = parse_timestamp(header.date, header.time) else {
            trace!(line_no, date = header.date, time = header.time, "unreadable timestamp, line dropped");
            self.dropped.bad_timestamp += 1;
            return;
        };

        let rest = header.rest;

        if let Some(action) = classify_notice(rest) {
            let author = extract_notice_author(rest);
            trace!(line_no, %author, %action, "membership notice");
            if self.config.include_system_notices {
                self.records
                    .push(MessageRecord::system(timestamp, author, rest, action));
            }
            return;
        }

        match rest.find(':') {
            Some(idx) if idx > 0 => {
                let author = rest[..idx].trim();
                let body = rest[idx + 1..].trim();
                self.state = ParseState::Accumulating(MessageRecord::regular(timestamp, author, body));
            }
            _ => {
                trace!(line_no, "header without author, line dropped");
                self.dropped.no_author += 1;
            }
        }
    }

    fn on_continuation(&mut self, line_no: usize, line: &str) {
        match &mut self.state {
            ParseState::Accumulating(record) => record.push_line(line),
            ParseState::Idle => {
                trace!(line_no, "no open message, continuation dropped");
                self.dropped.orphan += 1;
            }
        }
    }

    fn close_open(&mut self) {
        if let Some(record) = self.state.take() {
            self.records.push(record);
        }
    }

    fn finish(mut self) -> Vec<MessageRecord> {
        self.close_open();
        debug!(
            records = self.records.len(),
            bad_timestamp = self.dropped.bad_timestamp,
            no_author = self.dropped.no_author,
            orphan = self.dropped.orphan,
            "transcript parsed"
        );
        self.records
    }
}
