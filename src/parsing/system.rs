//! Membership notice heuristics.
//!
//! Notices are recognized by keyword, not by grammar. A regular message that
//! happens to contain "left" ("Bob: I left early") is classified as a notice.

use crate::record::SystemAction;

/// Substrings that mark a line as a membership notice.
const NOTICE_KEYWORDS: &[&str] = &["joined", "left", "added"];

/// Notice keywords that mean someone entered the group.
const JOIN_KEYWORDS: &[&str] = &["joined", "added"];

/// Words that end the subject name in a notice.
const ACTION_WORDS: &[&str] = &["joined", "left", "added", "removed"];

/// Literal fragments removed when no subject name precedes an action word.
const FALLBACK_NOISE: &[&str] = &["joined", "left", "added", "you", "using", "this", "group"];

/// Author used for notices with no recoverable name.
pub const SYSTEM_AUTHOR: &str = "System";

/// Classifies the text after a header.
///
/// Returns `None` for regular messages. Matching is a case-insensitive
/// substring test.
pub fn classify_notice(rest: &str) -> Option<SystemAction> {
    let lower = rest.to_lowercase();

    if !NOTICE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return None;
    }

    if JOIN_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Some(SystemAction::Joined)
    } else {
        Some(SystemAction::Left)
    }
}

/// Extracts the subject of a notice.
///
/// Words before the first action word form the name:
/// `"John Doe joined"` gives `"John Doe"`. When the notice starts with an
/// action word, the noise fragments are stripped instead, and an empty
/// result becomes [`SYSTEM_AUTHOR`].
pub fn extract_notice_author(text: &str) -> String {
    let mut name_parts: Vec<&str> = Vec::new();
    for word in text.split_whitespace() {
        let lower = word.to_lowercase();
        if ACTION_WORDS.contains(&lower.as_str()) {
            break;
        }
        name_parts.push(word);
    }

    if !name_parts.is_empty() {
        return name_parts.join(" ");
    }

    let mut cleaned = text.to_string();
    for noise in FALLBACK_NOISE {
        cleaned = cleaned.replace(noise, "");
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        SYSTEM_AUTHOR.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_joined() {
        assert_eq!(classify_notice("John Doe joined"), Some(SystemAction::Joined));
        assert_eq!(
            classify_notice("Alice joined using this group's invite link"),
            Some(SystemAction::Joined)
        );
    }

    #[test]
    fn test_classify_added_counts_as_joined() {
        assert_eq!(classify_notice("Bob added Carol"), Some(SystemAction::Joined));
    }

    #[test]
    fn test_classify_left() {
        assert_eq!(classify_notice("John Doe left"), Some(SystemAction::Left));
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify_notice("DAVE JOINED"), Some(SystemAction::Joined));
        assert_eq!(classify_notice("Eve Left"), Some(SystemAction::Left));
    }

    #[test]
    fn test_classify_regular_message() {
        assert_eq!(classify_notice("Alice: Hello"), None);
        assert_eq!(classify_notice("Bob removed Carol"), None);
    }

    #[test]
    fn test_classify_substring_fuzziness() {
        // "left" inside ordinary text still reads as a notice.
        assert_eq!(classify_notice("Bob: I left early"), Some(SystemAction::Left));
    }

    #[test]
    fn test_extract_author_before_action_word() {
        assert_eq!(extract_notice_author("John Doe joined"), "John Doe");
        assert_eq!(extract_notice_author("John Doe left"), "John Doe");
        assert_eq!(extract_notice_author("Bob added Carol"), "Bob");
        assert_eq!(extract_notice_author("Bob removed Carol"), "Bob");
        assert_eq!(extract_notice_author("Ann   Lee   LEFT"), "Ann Lee");
    }

    #[test]
    fn test_extract_author_requires_whole_word() {
        // "joined." is not the word "joined"; the scan runs to the end.
        assert_eq!(extract_notice_author("Kim joined."), "Kim joined.");
    }

    #[test]
    fn test_extract_author_fallback_to_system() {
        assert_eq!(extract_notice_author("joined"), SYSTEM_AUTHOR);
        assert_eq!(extract_notice_author("added you"), SYSTEM_AUTHOR);
        assert_eq!(extract_notice_author(""), SYSTEM_AUTHOR);
    }

    #[test]
    fn test_extract_author_fallback_strips_noise() {
        // Leading action word, the rest is stripped case-sensitively.
        assert_eq!(extract_notice_author("Left the group"), "Left the");
        assert_eq!(extract_notice_author("added Zoe"), "Zoe");
    }
}
