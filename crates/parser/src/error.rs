use thiserror::Error;

/// Reasons an input is rejected before parsing is attempted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// Input is empty or whitespace-only
    #[error("input is empty; paste some conversation text")]
    Empty,

    /// Input is too short to be a conversation
    #[error("input is too short ({len} chars); paste a complete conversation")]
    TooShort { len: usize },

    /// Input is a bare URL; this parser only handles pasted text
    #[error("URL input is not supported; paste the conversation text itself")]
    UrlInput,
}

/// Invalid parser configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_title_chars must be > 0")]
    ZeroTitleLength,

    #[error("title_break_floor ({floor}) must be below max_title_chars ({max})")]
    BreakFloorTooHigh { floor: usize, max: usize },
}
