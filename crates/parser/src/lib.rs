//! # Chatlift Parser
//!
//! Reconstructs a structured, speaker-tagged transcript from an
//! unstructured chat dump (text copy-pasted out of a chat UI).
//!
//! ## Pipeline
//!
//! ```text
//! Raw paste
//!     │
//!     ├──> Platform Detection (product-name scan over the whole text)
//!     │
//!     ├──> Line Scan
//!     │    ├─> Junk filter (UI chrome lines dropped outright)
//!     │    ├─> Role classification ("You:", "ChatGPT:", ...)
//!     │    └─> Turn accumulation (group body lines under the open role)
//!     │
//!     ├──> Per-turn Cleanup
//!     │    ├─> Residual chrome scrub ("Copy code", "Read aloud", ...)
//!     │    └─> Code-block inference (fence unwrapped source code)
//!     │
//!     └──> Assembly
//!          ├─> Merge adjacent same-role turns
//!          └─> Title derivation from the first meaningful user turn
//! ```
//!
//! Everything is a pure function of the input string; the only shared
//! state is a set of immutable pattern tables built on first use.
//!
//! ## Example
//!
//! ```rust
//! use chatlift_parser::{parse, Role};
//!
//! let result = parse("You: Hi\n\nChatGPT: Hello there!");
//! assert_eq!(result.messages.len(), 2);
//! assert_eq!(result.messages[0].role, Role::User);
//! assert_eq!(result.platform.as_deref(), Some("ChatGPT"));
//! ```

mod classify;
mod cleaner;
mod codefence;
mod config;
mod error;
mod parser;
mod patterns;
mod platform;
mod title;
mod types;
mod validate;

pub use config::ParserConfig;
pub use error::{ConfigError, ValidateError};
pub use parser::{parse, TranscriptParser};
pub use types::{Message, ParseResult, Role};
pub use validate::validate_input;
