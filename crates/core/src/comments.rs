//! Live chat comment rules.

use crate::error::CoreError;
use crate::validation::trimmed_text;

/// Maximum comment length (characters).
pub const MAX_MESSAGE_LENGTH: u64 = 500;

/// Default number of comments returned per page.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum number of comments returned per page.
pub const MAX_LIMIT: i64 = 200;

/// Validate and normalise a chat message.
pub fn validate_message(message: &str) -> Result<String, CoreError> {
    trimmed_text("message", message, 1, MAX_MESSAGE_LENGTH)
}

/// Clamp a requested page size into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
