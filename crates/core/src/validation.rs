//! Shared text validation helpers.

use validator::ValidateLength;

use crate::error::CoreError;

/// Trim `value` and check that its character count lies in `min..=max`.
///
/// Returns the trimmed string so callers store the normalised form.
pub fn trimmed_text(field: &str, value: &str, min: u64, max: u64) -> Result<String, CoreError> {
    let trimmed = value.trim().to_string();
    if trimmed.validate_length(Some(min), Some(max), None) {
        return Ok(trimmed);
    }
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Err(CoreError::Validation(format!(
        "{field} must be between {min} and {max} characters (got {})",
        trimmed.chars().count()
    )))
}

/// Validate that `value` is one of `allowed`.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {allowed:?}"
        )))
    }
}
