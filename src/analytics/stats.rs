//! Whole-transcript record statistics.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::record::{MessageRecord, SystemAction};

/// Counts over every parsed record, independent of any window.
///
/// # Example
///
/// ```rust
/// use chatpulse::analytics::RecordStats;
/// use chatpulse::parser::parse;
///
/// let records = parse("[01/01/2024, 09:00 AM] Alice: Hi\n[01/01/2024, 09:10 AM] Bob joined");
/// let stats = RecordStats::from_records(&records);
///
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.regular, 1);
/// assert_eq!(stats.joined, 1);
/// assert_eq!(stats.distinct_authors, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStats {
    /// Number of parsed records.
    pub total: usize,
    /// Regular messages.
    pub regular: usize,
    /// Membership notices.
    pub system: usize,
    /// Join and "added" notices.
    pub joined: usize,
    /// Leave notices.
    pub left: usize,
    /// Distinct authors of regular messages and notices.
    pub distinct_authors: usize,
    /// Earliest timestamp, `None` for an empty transcript.
    pub first_timestamp: Option<NaiveDateTime>,
    /// Latest timestamp, `None` for an empty transcript.
    pub last_timestamp: Option<NaiveDateTime>,
}

impl RecordStats {
    pub fn from_records(records: &[MessageRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        let mut authors: BTreeSet<&str> = BTreeSet::new();

        for record in records {
            if record.is_system {
                stats.system += 1;
                match record.action {
                    Some(SystemAction::Joined) => stats.joined += 1,
                    Some(SystemAction::Left) => stats.left += 1,
                    None => {}
                }
            } else {
                stats.regular += 1;
            }
            authors.insert(record.author.as_str());

            let ts = record.timestamp;
            stats.first_timestamp = Some(stats.first_timestamp.map_or(ts, |t| t.min(ts)));
            stats.last_timestamp = Some(stats.last_timestamp.map_or(ts, |t| t.max(ts)));
        }

        stats.distinct_authors = authors.len();
        stats
    }

    /// Share of records that are membership notices, in percent.
    pub fn system_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.system as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty() {
        let stats = RecordStats::from_records(&[]);
        assert_eq!(stats, RecordStats::default());
        assert!(stats.system_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts() {
        let records = vec![
            MessageRecord::regular(ts(3, 10), "Alice", "hi"),
            MessageRecord::regular(ts(1, 10), "Bob", "yo"),
            MessageRecord::system(ts(2, 9), "Carol", "Carol joined", SystemAction::Joined),
            MessageRecord::system(ts(4, 9), "Bob", "Bob left", SystemAction::Left),
        ];
        let stats = RecordStats::from_records(&records);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.regular, 2);
        assert_eq!(stats.system, 2);
        assert_eq!(stats.joined, 1);
        assert_eq!(stats.left, 1);
        assert_eq!(stats.distinct_authors, 3);
        assert_eq!(stats.first_timestamp, Some(ts(1, 10)));
        assert_eq!(stats.last_timestamp, Some(ts(4, 9)));
        assert!((stats.system_ratio() - 50.0).abs() < f64::EPSILON);
    }
}
