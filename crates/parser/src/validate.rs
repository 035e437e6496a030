use crate::error::ValidateError;

/// Minimum plausible length for a pasted conversation
const MIN_INPUT_CHARS: usize = 10;

/// Reject input that cannot be a pasted conversation.
///
/// Callers run this before [`crate::parse`]; the parser itself is total
/// and never fails, so the gate lives here. URL input is rejected because
/// fetching is a separate, network-dependent path this crate does not
/// provide.
pub fn validate_input(raw: &str) -> Result<(), ValidateError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidateError::Empty);
    }

    if trimmed.chars().count() < MIN_INPUT_CHARS {
        return Err(ValidateError::TooShort {
            len: trimmed.chars().count(),
        });
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Err(ValidateError::UrlInput);
    }

    Ok(())
}
