//! Header line recognition.
//!
//! A header line starts a new transcript entry. WhatsApp writes one of two
//! layouts depending on platform and locale:
//!
//! - Bracketed (iOS): `[15/01/2024, 10:30:45 AM] Alice: Hello`
//! - Dashed (Android): `15/01/2024, 10:30 - Alice: Hello`
//!
//! Only the shape is checked here. Whether the date and time actually parse
//! is decided later by [`parse_timestamp`](super::parse_timestamp).

use std::sync::LazyLock;

use regex::Regex;

/// Header layout variants, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// `[<date>, <time>] <rest>`
    Bracketed,
    /// `<date>, <time> - <rest>`
    Dashed,
}

impl HeaderLayout {
    /// Returns the regex pattern for this layout.
    ///
    /// Capture groups: 1 = date, 2 = time, 3 = rest of the line.
    pub fn pattern(self) -> &'static str {
        match self {
            // [15/01/2024, 10:30:45 AM] Sender: Message
            HeaderLayout::Bracketed => {
                r"^\[(\d{1,4}[/-]\d{1,2}[/-]\d{1,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?(?:\s*[APap][Mm])?)\]\s*(.*)$"
            }
            // 15/01/2024, 10:30 - Sender: Message
            HeaderLayout::Dashed => {
                r"^(\d{1,4}[/-]\d{1,2}[/-]\d{1,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?(?:\s*[APap][Mm])?)\s*-\s*(.*)$"
            }
        }
    }

    /// Returns all layouts in the order they are tried.
    pub fn all() -> &'static [HeaderLayout] {
        &[HeaderLayout::Bracketed, HeaderLayout::Dashed]
    }

    fn regex(self) -> &'static Regex {
        match self {
            HeaderLayout::Bracketed => &BRACKETED,
            HeaderLayout::Dashed => &DASHED,
        }
    }
}

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HeaderLayout::Bracketed.pattern()).expect("bracketed header pattern is valid")
});

static DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HeaderLayout::Dashed.pattern()).expect("dashed header pattern is valid")
});

/// The pieces of a recognized header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Which layout matched.
    pub layout: HeaderLayout,
    /// Raw date text, e.g. `15/01/2024`.
    pub date: &'a str,
    /// Raw time text, e.g. `10:30:45 AM`.
    pub time: &'a str,
    /// Everything after the header prefix, trimmed.
    pub rest: &'a str,
}

/// Tries each layout in order and returns the first match.
///
/// The line is expected to be trimmed already.
pub fn match_header(line: &str) -> Option<Header<'_>> {
    HeaderLayout::all().iter().find_map(|&layout| {
        let caps = layout.regex().captures(line)?;
        Some(Header {
            layout,
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            rest: caps.get(3).map_or("", |m| m.as_str().trim()),
        })
    })
}
