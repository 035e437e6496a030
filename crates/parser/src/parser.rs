//! Turn accumulation and the parse entrypoint.

use crate::classify::{classify_line, is_junk_line};
use crate::cleaner::clean_content;
use crate::codefence::wrap_code_blocks;
use crate::config::ParserConfig;
use crate::platform::{detect_platform, DOCUMENT_PLATFORM};
use crate::title::generate_title;
use crate::types::{Message, ParseResult, Role};
use log::debug;

/// Main parser interface for reconstructing transcripts
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Create a new parser with configuration
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        config
            .validate()
            .expect("Invalid parser configuration provided");
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reconstruct a structured transcript from a raw chat dump.
    ///
    /// Total function: every heuristic has a permissive fallback, so
    /// malformed input degrades to lower-fidelity structuring instead of
    /// failing. Empty or whitespace-only input yields zero messages and
    /// is expected to be rejected by [`crate::validate_input`] upstream.
    pub fn parse(&self, raw: &str) -> ParseResult {
        let platform = detect_platform(raw);

        // One pre-scan for role markers. Without any, segmentation would
        // be guesswork: the whole input becomes a single user message.
        let has_role_markers = raw
            .split('\n')
            .any(|line| classify_line(line).role.is_some());

        if !has_role_markers {
            debug!("no role markers found; treating input as a document");
            let mut messages = Vec::new();
            let content = self.clean_turn(raw.trim());
            if !content.is_empty() {
                messages.push(Message::new(Role::User, content));
            }
            let title = generate_title(&messages, &self.config);
            return ParseResult::new(title, messages, Some(DOCUMENT_PLATFORM.to_string()));
        }

        let mut messages: Vec<Message> = Vec::new();
        let mut current_role: Option<Role> = None;
        let mut buffer: Vec<String> = Vec::new();

        for line in raw.split('\n') {
            if is_junk_line(line) {
                continue;
            }

            let classified = classify_line(line);
            if let Some(role) = classified.role {
                // New speaker: flush the open turn. Body accumulated
                // before the first marker is provisional and dropped here.
                self.flush_turn(current_role, &mut buffer, &mut messages);
                current_role = Some(role);
                if !classified.content.is_empty() {
                    buffer.push(classified.content);
                }
            } else if current_role.is_some() {
                buffer.push(line.to_string());
            } else if !line.trim().is_empty() {
                buffer.push(line.to_string());
            }
        }

        self.flush_turn(current_role, &mut buffer, &mut messages);

        // Body text that never met a role marker on this path can only
        // mean every marked turn cleaned away to nothing.
        if messages.is_empty() && !buffer.is_empty() {
            let content = self.clean_turn(buffer.join("\n").trim());
            if !content.is_empty() {
                messages.push(Message::new(Role::User, content));
            }
        }

        let mut merged = merge_adjacent(messages);

        if merged.is_empty() && !raw.trim().is_empty() {
            debug!("all turns cleaned away; falling back to whole-input message");
            let content = self.clean_turn(raw.trim());
            if !content.is_empty() {
                merged.push(Message::new(Role::User, content));
            }
        }

        let title = generate_title(&merged, &self.config);
        debug!(
            "parsed {} message(s), platform {:?}",
            merged.len(),
            platform
        );
        ParseResult::new(title, merged, Some(platform.to_string()))
    }

    /// Flush the buffered turn as a message if it survives cleaning.
    fn flush_turn(
        &self,
        role: Option<Role>,
        buffer: &mut Vec<String>,
        messages: &mut Vec<Message>,
    ) {
        if let Some(role) = role {
            if !buffer.is_empty() {
                let content = self.clean_turn(buffer.join("\n").trim());
                if !content.is_empty() {
                    messages.push(Message::new(role, content));
                }
            }
        }
        buffer.clear();
    }

    fn clean_turn(&self, text: &str) -> String {
        let cleaned = clean_content(text);
        if self.config.infer_code_blocks {
            wrap_code_blocks(&cleaned)
        } else {
            cleaned
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse with the default configuration.
#[must_use]
pub fn parse(raw: &str) -> ParseResult {
    TranscriptParser::default().parse(raw)
}

/// Coalesce adjacent same-role messages with a blank-line separator.
/// Defends against the classifier re-triggering on stray marker-like
/// lines mid-turn; afterwards no two adjacent messages share a role.
fn merge_adjacent(messages: Vec<Message>) -> Vec<Message> {
    let mut merged: Vec<Message> = Vec::with_capacity(messages.len());

    for message in messages {
        match merged.last_mut() {
            Some(prev) if prev.role == message.role => {
                prev.content.push_str("\n\n");
                prev.content.push_str(&message.content);
            }
            _ => merged.push(message),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_turn_exchange() {
        let result = parse("You: Hi\n\nChatGPT: Hello there!");
        assert_eq!(
            result.messages,
            vec![
                Message::new(Role::User, "Hi"),
                Message::new(Role::Model, "Hello there!"),
            ]
        );
        assert_eq!(result.platform.as_deref(), Some("ChatGPT"));
    }

    #[test]
    fn test_body_lines_attach_to_open_turn() {
        let result = parse("You: first line\nsecond line\n\nClaude: reply");
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].content, "first line\nsecond line");
    }

    #[test]
    fn test_no_markers_becomes_single_user_document() {
        let result = parse("Just some notes with no dialogue at all.");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, Role::User);
        assert_eq!(
            result.messages[0].content,
            "Just some notes with no dialogue at all."
        );
        assert_eq!(result.platform.as_deref(), Some("Document"));
    }

    #[test]
    fn test_double_fired_markers_merge() {
        let result = parse("You: a\nYou: b\nClaude: c");
        assert_eq!(
            result.messages,
            vec![
                Message::new(Role::User, "a\n\nb"),
                Message::new(Role::Model, "c"),
            ]
        );
    }

    #[test]
    fn test_junk_lines_never_reach_content() {
        let result = parse("You: question\nCopy code\n1 / 2\nClaude: answer\n👍");
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].content, "question");
        assert_eq!(result.messages[1].content, "answer");
    }

    #[test]
    fn test_leading_body_before_first_marker_dropped() {
        let result = parse("stray header line\nYou: real question\nClaude: answer");
        assert_eq!(result.messages[0].content, "real question");
    }

    #[test]
    fn test_empty_turns_dropped() {
        // The bare "You" marker opens a turn that never gets content.
        let result = parse("You\nClaude: hello");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, Role::Model);
    }

    #[test]
    fn test_no_adjacent_messages_share_role() {
        let result = parse("You: a\nHuman: b\nClaude: c\nGemini: d\nYou: e");
        for pair in result.messages.windows(2) {
            assert_ne!(pair[0].role, pair[1].role);
        }
    }

    #[test]
    fn test_code_inference_disabled_by_config() {
        let parser = TranscriptParser::new(ParserConfig::plain_text());
        let result = parser.parse("You: fix this\nClaude: sure\ndef f(x):\n    return x");
        assert!(!result.messages[1].content.contains("```"));
    }

    #[test]
    fn test_whitespace_only_input_yields_no_messages() {
        let result = parse("   \n  \n");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_merge_adjacent_preserves_order() {
        let messages = vec![
            Message::new(Role::User, "a"),
            Message::new(Role::User, "b"),
            Message::new(Role::Model, "c"),
            Message::new(Role::Model, "d"),
            Message::new(Role::User, "e"),
        ];
        let merged = merge_adjacent(messages);
        assert_eq!(
            merged,
            vec![
                Message::new(Role::User, "a\n\nb"),
                Message::new(Role::Model, "c\n\nd"),
                Message::new(Role::User, "e"),
            ]
        );
    }
}
