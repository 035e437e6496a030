use serde::{Deserialize, Serialize};

/// Speaker attribution for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    System,
}

impl Role {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
            Self::System => "system",
        }
    }

    /// Display label for rendered documents
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Model => "Assistant",
            Self::System => "System",
        }
    }
}

/// One reconstructed turn of the conversation
///
/// Invariant: `content` is non-empty, trimmed UTF-8 text. Markdown is
/// preserved verbatim apart from fencing added by code-block inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Output of one parse invocation
///
/// `messages` is in chronological turn order; that is the sole ordering
/// guarantee (no timestamps are modeled). Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Short derived title for the conversation
    pub title: String,

    /// Ordered, speaker-tagged messages
    pub messages: Vec<Message>,

    /// Inferred source product ("ChatGPT", "Claude", ...), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl ParseResult {
    /// Create a new parse result
    #[must_use]
    pub fn new(title: String, messages: Vec<Message>, platform: Option<String>) -> Self {
        Self {
            title,
            messages,
            platform,
        }
    }
}

/// Transient result of classifying a single line.
/// Exists only during the scan; never part of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineClassification {
    pub role: Option<Role>,
    pub content: String,
}
