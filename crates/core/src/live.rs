//! Input rules for the live-input proxy functions.

use crate::error::CoreError;

/// Upper bound on a live input identifier. Platform ids are 32 hex chars.
const MAX_LIVE_INPUT_ID_LENGTH: usize = 64;

/// Validate a live input id supplied by the client.
///
/// The id is interpolated into the upstream URL path, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
pub fn validate_live_input_id(id: Option<&str>) -> Result<&str, CoreError> {
    let id = match id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(CoreError::Validation(
                "live_input_id is required".to_string(),
            ))
        }
    };

    let well_formed = id.len() <= MAX_LIVE_INPUT_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !well_formed {
        return Err(CoreError::Validation("live_input_id is invalid".to_string()));
    }
    Ok(id)
}
