//! Ordered pattern tables driving line classification.
//!
//! Order is semantically significant: the first matching pattern wins, so
//! specific markers must stay ahead of generic ones (e.g. product names
//! before the bare `A:` marker). Keep insertions ordered deliberately.

use once_cell::sync::Lazy;
use regex::Regex;

fn build(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hard-coded pattern"))
        .collect()
}

/// Markers opening a USER turn. Checked before the model table.
pub(crate) static USER_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?i)^You\s*[:：]\s*",
        r"(?i)^User\s*[:：]\s*",
        r"(?i)^Human\s*[:：]\s*",
        r"(?i)^Me\s*[:：]\s*",
        r"(?i)^H\s*[:：]\s*",
        r"(?i)^\[You\]\s*",
        r"(?i)^\[User\]\s*",
        r"(?i)^You said[:：]?\s*",
        // Just "You" on its own line (common in ChatGPT exports)
        r"(?i)^You\s*$",
    ])
});

/// Markers opening a MODEL turn.
pub(crate) static MODEL_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?i)^ChatGPT\s*[:：]?\s*",
        r"(?i)^GPT[-\s]?4o?\s*[:：]?\s*",
        r"(?i)^GPT[-\s]?3\.5\s*[:：]?\s*",
        r"(?i)^Assistant\s*[:：]\s*",
        r"(?i)^Claude\s*[:：]?\s*",
        r"(?i)^Gemini\s*[:：]?\s*",
        r"(?i)^Model\s*[:：]\s*",
        r"(?i)^AI\s*[:：]\s*",
        r"(?i)^Bot\s*[:：]\s*",
        r"(?i)^Copilot\s*[:：]?\s*",
        r"(?i)^GitHub Copilot\s*[:：]?\s*",
        r"(?i)^Bing\s*[:：]?\s*",
        r"(?i)^Perplexity\s*[:：]?\s*",
        r"(?i)^A\s*[:：]\s*",
        r"(?i)^\[Assistant\]\s*",
        r"(?i)^\[ChatGPT\]\s*",
        r"(?i)^ChatGPT said[:：]?\s*",
        // Bare product name on its own line
        r"(?i)^ChatGPT\s*$",
        r"(?i)^Claude\s*$",
        r"(?i)^Gemini\s*$",
        r"(?i)^Copilot\s*$",
    ])
});

/// Lines that are pure UI chrome; dropped before classification.
pub(crate) static JUNK_LINES: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?i)^Copy code$",
        r"(?i)^Copy$",
        r"(?i)^Copied!?$",
        r"(?i)^Regenerate response$",
        r"(?i)^Regenerate$",
        r"(?i)^Bad response$",
        r"(?i)^Good response$",
        r"^👍\s*$",
        r"^👎\s*$",
        r"(?i)^Share$",
        r"(?i)^Edit$",
        r"(?i)^Delete$",
        // Pagination like "1 / 3"
        r"^\d+\s*/\s*\d+$",
        r"(?i)^Today at \d+:\d+\s*(AM|PM)?$",
        r"(?i)^Yesterday at \d+:\d+\s*(AM|PM)?$",
        // Timestamps
        r"(?i)^\d{1,2}:\d{2}\s*(AM|PM)?$",
        r"(?i)^Sent \d+ (minutes?|hours?|days?) ago$",
        r"^•••$",
        r"^\.\.\.$",
        r"(?i)^Read aloud$",
        r"(?i)^Stop generating$",
        r"(?i)^Continue generating$",
        r"(?i)^Skip to content$",
        r"(?i)^Chat history$",
        r"(?i)^New chat$",
        r"(?i)^Upgrade plan$",
        r"(?i)^Get Plus$",
        r"(?i)^Upload[ed]?\s*(image|file)?$",
        r"(?i)^Attach[ed]?\s*(image|file)?$",
        r"(?i)^Search$",
        r"(?i)^Reason$",
        r"(?i)^Create image$",
        r"(?i)^Search the web$",
        r"(?i)^Deep research$",
        r"(?i)^Think$",
        r"(?i)^temporary chat$",
        r"(?i)^ChatGPT Plus$",
        // Just "said:" alone
        r"(?i)^said[:：]?\s*$",
        r"(?i)^Memory updated$",
        r"(?i)^Generating\.\.\.$",
        r"(?i)^Thinking\.\.\.$",
        r"(?i)^Loading\.\.\.$",
    ])
});

/// Residual junk stripped from the start of marker remainders.
pub(crate) static JUNK_PREFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?i)^said[:：]\s*",
        r"(?i)^says[:：]\s*",
        r"(?i)^replied[:：]\s*",
    ])
});

/// Product hints tested against the whole input; first match labels the
/// transcript.
pub(crate) static PLATFORM_HINTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)ChatGPT|GPT-4|GPT-3\.5", "ChatGPT"),
        (r"(?i)Claude", "Claude"),
        (r"(?i)Gemini", "Gemini"),
        (r"(?i)Copilot|GitHub Copilot", "Copilot"),
        (r"(?i)Perplexity", "Perplexity"),
        (r"(?i)Bing", "Bing Chat"),
    ]
    .iter()
    .map(|(p, label)| (Regex::new(p).expect("hard-coded pattern"), *label))
    .collect()
});
