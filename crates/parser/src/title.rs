//! Derives a short document title from the first meaningful user turn.

use crate::config::ParserConfig;
use crate::types::{Message, Role};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum content length for a user message to qualify as title source
const MIN_SOURCE_CHARS: usize = 5;

/// Fallback when the qualifying message boils down to nothing
const EMPTY_TITLE: &str = "Conversation";

/// Fallback when no user message qualifies at all
const FALLBACK_TITLE: &str = "Imported Conversation";

static TITLE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Skip to content|Chat history|You said[:：]?)\s*").expect("hard-coded pattern")
});

/// Derive a title from the merged message sequence.
///
/// Takes the first line of the first user message longer than
/// `MIN_SOURCE_CHARS`, strips meta prefixes that survive the paste, and
/// truncates to `max_title_chars` at a word boundary. The boundary is
/// only honored past `title_break_floor`; an earlier space would leave
/// the title uselessly short, so the cut is hard instead.
pub(crate) fn generate_title(messages: &[Message], config: &ParserConfig) -> String {
    let source = messages
        .iter()
        .find(|m| m.role == Role::User && m.content.chars().count() > MIN_SOURCE_CHARS);

    let Some(message) = source else {
        return FALLBACK_TITLE.to_string();
    };

    let first_line = message.content.lines().next().unwrap_or("").trim();
    let content = TITLE_PREFIX.replace(first_line, "").trim().to_string();

    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= config.max_title_chars {
        if content.is_empty() {
            return EMPTY_TITLE.to_string();
        }
        return content;
    }

    let truncated: String = chars[..config.max_title_chars].iter().collect();
    let cut = match truncated.rfind(' ') {
        Some(pos) if truncated[..pos].chars().count() > config.title_break_floor => {
            truncated[..pos].to_string()
        }
        _ => truncated,
    };
    format!("{cut}...")
}
