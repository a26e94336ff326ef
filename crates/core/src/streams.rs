//! Broadcast stream status constants and validation.

use crate::error::CoreError;
use crate::validation::trimmed_text;

/// The broadcaster is on air.
pub const STATUS_LIVE: &str = "live";
/// The broadcast has finished.
pub const STATUS_ENDED: &str = "ended";

/// Maximum stream title length (characters).
pub const MAX_TITLE_LENGTH: u64 = 120;

/// Title used when the broadcaster does not supply one.
pub const DEFAULT_TITLE: &str = "Live Roast";

/// Validate and normalise a stream title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    trimmed_text("title", title, 1, MAX_TITLE_LENGTH)
}

/// Resolve an optional title, falling back to [`DEFAULT_TITLE`] when it is
/// absent or blank.
pub fn title_or_default(title: Option<&str>) -> Result<String, CoreError> {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => validate_title(t),
        _ => Ok(DEFAULT_TITLE.to_string()),
    }
}

/// Validate that a stream in `current` status may be ended.
pub fn validate_can_end(current: &str) -> Result<(), CoreError> {
    if current == STATUS_LIVE {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Stream is '{current}' and cannot be ended"
        )))
    }
}
