//! Per-line role classification and junk filtering.

use crate::patterns::{JUNK_LINES, JUNK_PREFIXES, MODEL_MARKERS, USER_MARKERS};
use crate::types::{LineClassification, Role};

/// Check whether a line is pure UI chrome (or blank) and should be
/// dropped before it can be mistaken for a marker or body text.
pub(crate) fn is_junk_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }
    JUNK_LINES.iter().any(|p| p.is_match(trimmed))
}

/// Strip residual junk prefixes ("said:", "says:", "replied:") from a
/// marker remainder and retrim.
pub(crate) fn strip_junk_prefixes(content: &str) -> String {
    let mut cleaned = content.to_string();
    for pattern in JUNK_PREFIXES.iter() {
        cleaned = pattern.replace(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Classify a single line: does it open a new user or model turn?
///
/// Pure function of the line's content; no lookback or lookahead. The
/// user table is checked first, then the model table; within each table
/// the first matching pattern wins. On a match the marker prefix is
/// stripped and the remainder cleaned.
pub(crate) fn classify_line(line: &str) -> LineClassification {
    let trimmed = line.trim();

    for pattern in USER_MARKERS.iter() {
        if pattern.is_match(trimmed) {
            let content = strip_junk_prefixes(&pattern.replace(trimmed, ""));
            return LineClassification {
                role: Some(Role::User),
                content,
            };
        }
    }

    for pattern in MODEL_MARKERS.iter() {
        if pattern.is_match(trimmed) {
            let content = strip_junk_prefixes(&pattern.replace(trimmed, ""));
            return LineClassification {
                role: Some(Role::Model),
                content,
            };
        }
    }

    LineClassification {
        role: None,
        content: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_marker_stripped() {
        let c = classify_line("You: how do I sort a vec?");
        assert_eq!(c.role, Some(Role::User));
        assert_eq!(c.content, "how do I sort a vec?");
    }

    #[test]
    fn test_model_marker_stripped() {
        let c = classify_line("ChatGPT: Use sort_unstable.");
        assert_eq!(c.role, Some(Role::Model));
        assert_eq!(c.content, "Use sort_unstable.");
    }

    #[test]
    fn test_bare_marker_line_has_empty_content() {
        let c = classify_line("You");
        assert_eq!(c.role, Some(Role::User));
        assert_eq!(c.content, "");

        let c = classify_line("Claude");
        assert_eq!(c.role, Some(Role::Model));
        assert_eq!(c.content, "");
    }

    #[test]
    fn test_said_prefix_removed_after_marker() {
        let c = classify_line("ChatGPT said: Hello!");
        assert_eq!(c.role, Some(Role::Model));
        assert_eq!(c.content, "Hello!");
    }

    #[test]
    fn test_plain_prose_is_unclassified() {
        let c = classify_line("And here is more of the answer.");
        assert_eq!(c.role, None);
        assert_eq!(c.content, "And here is more of the answer.");
    }

    #[test]
    fn test_user_table_checked_before_model() {
        // "Human:" is a user marker even though it contains "AI"-free prose;
        // ordering matters for markers that could shadow each other.
        let c = classify_line("Human: hi");
        assert_eq!(c.role, Some(Role::User));
    }

    #[test]
    fn test_fullwidth_colon_accepted() {
        let c = classify_line("You： 你好");
        assert_eq!(c.role, Some(Role::User));
        assert_eq!(c.content, "你好");
    }

    #[test]
    fn test_junk_lines() {
        assert!(is_junk_line(""));
        assert!(is_junk_line("   "));
        assert!(is_junk_line("Copy code"));
        assert!(is_junk_line("  Regenerate response  "));
        assert!(is_junk_line("3 / 7"));
        assert!(is_junk_line("Yesterday at 10:04 PM"));
        assert!(!is_junk_line("Copy the file to /tmp"));
        assert!(!is_junk_line("fn main() {}"));
    }

    #[test]
    fn test_strip_junk_prefixes_idempotent() {
        let once = strip_junk_prefixes("said: hello");
        assert_eq!(once, "hello");
        assert_eq!(strip_junk_prefixes(&once), "hello");
    }
}
