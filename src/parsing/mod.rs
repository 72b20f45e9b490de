//! Line-level parsing helpers for WhatsApp TXT transcripts.
//!
//! These are the building blocks of [`TranscriptParser`](crate::parser::TranscriptParser):
//! header recognition, date/time layouts and membership notice heuristics.

pub mod datetime;
pub mod header;
pub mod system;

// Re-export commonly used items
pub use datetime::{DATE_LAYOUTS, DateLayout, TIME_FORMATS, parse_date, parse_time, parse_timestamp};
pub use header::{Header, HeaderLayout, match_header};
pub use system::{SYSTEM_AUTHOR, classify_notice, extract_notice_author};
