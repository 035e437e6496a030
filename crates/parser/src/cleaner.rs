//! Scrubs residual UI chrome that gets glued into turn content.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_CHROME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(Skip to content|Chat history)\s*").expect("hard-coded pattern"));

static COPY_CHROME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(Copy code|Copied!?)\s*").expect("hard-coded pattern"));

static INLINE_CHROME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(Read aloud|Stop generating)\s*").expect("hard-coded pattern"));

/// Remove chrome substrings from an assembled turn's text and retrim.
///
/// "Copy code" buttons sit between prose and the code they belong to, so
/// they become a line break; "Read aloud" style labels collapse to a
/// space. Idempotent on already-clean input.
pub(crate) fn clean_content(content: &str) -> String {
    let cleaned = LEADING_CHROME.replace(content, "");
    let cleaned = COPY_CHROME.replace_all(&cleaned, "\n");
    let cleaned = INLINE_CHROME.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
