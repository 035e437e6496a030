use crate::patterns::PLATFORM_HINTS;

/// Default label when no product hint matches
pub(crate) const DEFAULT_PLATFORM: &str = "AI Chat";

/// Label for the whole-input fallback (no role markers at all)
pub(crate) const DOCUMENT_PLATFORM: &str = "Document";

/// Scan the raw text for known product names; first hint wins.
/// Cosmetic labeling only; never affects segmentation.
pub(crate) fn detect_platform(text: &str) -> &'static str {
    PLATFORM_HINTS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map_or(DEFAULT_PLATFORM, |(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_products() {
        assert_eq!(detect_platform("You: hi\nChatGPT: hello"), "ChatGPT");
        assert_eq!(detect_platform("Claude: certainly"), "Claude");
        assert_eq!(detect_platform("a Gemini transcript"), "Gemini");
        assert_eq!(detect_platform("GitHub Copilot suggested"), "Copilot");
        assert_eq!(detect_platform("via Bing"), "Bing Chat");
    }

    #[test]
    fn test_default_label() {
        assert_eq!(detect_platform("You: hi\nA: hello"), DEFAULT_PLATFORM);
    }

    #[test]
    fn test_gpt_version_counts_as_chatgpt() {
        assert_eq!(detect_platform("exported from GPT-4"), "ChatGPT");
    }
}
