use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Re-scan cleaned turns for unfenced source code and wrap it in
    /// markdown fences
    pub infer_code_blocks: bool,

    /// Maximum derived title length in characters
    pub max_title_chars: usize,

    /// Only break the title at a space past this position; earlier spaces
    /// would leave the title uselessly short, so hard-truncate instead
    pub title_break_floor: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            infer_code_blocks: true,
            max_title_chars: 50,
            title_break_floor: 25,
        }
    }
}

impl ParserConfig {
    /// Config that leaves message text exactly as pasted (no fencing)
    #[must_use]
    pub fn plain_text() -> Self {
        Self {
            infer_code_blocks: false,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_title_chars == 0 {
            return Err(ConfigError::ZeroTitleLength);
        }
        if self.title_break_floor >= self.max_title_chars {
            return Err(ConfigError::BreakFloorTooHigh {
                floor: self.title_break_floor,
                max: self.max_title_chars,
            });
        }
        Ok(())
    }
}
