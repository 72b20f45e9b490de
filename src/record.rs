//! Structured transcript records.
//!
//! This module provides [`MessageRecord`], one event recovered from a chat
//! transcript: either a regular message written by a member, or a membership
//! notice ("Alice joined", "Bob left") emitted by the chat application.
//!
//! # Examples
//!
//! ```
//! use chatpulse::{MessageRecord, SystemAction};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let msg = MessageRecord::regular(ts, "Alice", "Hello");
//! assert!(!msg.is_system());
//!
//! let notice = MessageRecord::system(ts, "Carol", "Carol joined", SystemAction::Joined);
//! assert!(notice.is_join());
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Membership action carried by a system notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemAction {
    /// A member joined or was added.
    Joined,
    /// A member left.
    Left,
}

impl SystemAction {
    /// Returns the wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemAction::Joined => "joined",
            SystemAction::Left => "left",
        }
    }
}

impl fmt::Display for SystemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single event recovered from a transcript.
///
/// Timestamps are naive: WhatsApp writes wall-clock time without an offset,
/// and the analytics window is computed against the local calendar.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Date and time from the header, to the second |
/// | `author` | `String` | Display name, compared by exact match |
/// | `body` | `String` | Message text, continuation lines joined with `\n` |
/// | `is_system` | `bool` | `true` for membership notices |
/// | `action` | `Option<SystemAction>` | Set only on system notices |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name of the author (or the subject of a notice).
    pub author: String,

    /// Message text. May contain newlines for multi-line messages.
    pub body: String,

    /// `true` when this record is a membership notice.
    pub is_system: bool,

    /// Membership action, present only when `is_system` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub action: Option<SystemAction>,
}

impl MessageRecord {
    /// Creates a regular member-authored message.
    pub fn regular(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
            is_system: false,
            action: None,
        }
    }

    /// Creates a membership notice.
    pub fn system(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
        action: SystemAction,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
            is_system: true,
            action: Some(action),
        }
    }

    /// Appends a continuation line to the body.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for membership notices.
    pub fn is_system(&self) -> bool {
        self.is_system
    }

    /// Returns the membership action, if this is a notice.
    pub fn action(&self) -> Option<SystemAction> {
        self.action
    }

    /// Returns `true` for a `joined` notice.
    pub fn is_join(&self) -> bool {
        self.is_system && self.action == Some(SystemAction::Joined)
    }

    /// Returns the number of physical lines the body spans.
    pub fn line_count(&self) -> usize {
        self.body.lines().count().max(1)
    }
}
