//! Unified error types for chatpulse.
//!
//! The parser and the aggregator are total: malformed transcript lines are
//! dropped, never reported. What remains here is the I/O and output surface,
//! configuration mistakes, and the one data-shape condition callers must map
//! to a user-facing message: [`ChatpulseError::NoMessages`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript did not contain a single recognizable message.
    ///
    /// Either the file is not a WhatsApp export, or every header line had a
    /// date/time no supported layout could read.
    #[error("No valid messages found in the chat file. Please check the file format.")]
    NoMessages,

    /// The raw input exceeds the configured size cap.
    #[error("File too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: usize,
        /// Actual size encountered
        actual_size: usize,
    },

    /// Invalid date supplied by the caller (e.g. the `--today` override).
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// Unknown output format name or file extension.
    #[error("Unknown output format: '{input}'. Expected one of: {expected}")]
    UnknownFormat {
        /// The unrecognized format name or extension
        input: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while assembling in-memory output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatpulseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatpulseError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatpulseError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatpulseError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an input-too-large error.
    pub fn input_too_large(max_size: usize, actual_size: usize) -> Self {
        ChatpulseError::InputTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Creates an unknown output format error.
    pub fn unknown_format(input: impl Into<String>, expected: &[&str]) -> Self {
        ChatpulseError::UnknownFormat {
            input: input.into(),
            expected: expected.join(", "),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if the transcript produced no records.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatpulseError::NoMessages)
    }

    /// Returns `true` if the input exceeded the size cap.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, ChatpulseError::InputTooLarge { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatpulseError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatpulseError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
