//! Club naming and membership rules.

use crate::error::CoreError;
use crate::validation::trimmed_text;

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_MEMBER: &str = "member";

pub const MIN_NAME_LENGTH: u64 = 3;
pub const MAX_NAME_LENGTH: u64 = 50;
pub const MAX_DESCRIPTION_LENGTH: u64 = 500;

/// Validate and normalise a club name.
pub fn validate_name(name: &str) -> Result<String, CoreError> {
    trimmed_text("name", name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

/// Normalise an optional description. Blank descriptions become `None`.
pub fn normalize_description(description: Option<&str>) -> Result<Option<String>, CoreError> {
    match description.map(str::trim) {
        Some(d) if !d.is_empty() => {
            trimmed_text("description", d, 1, MAX_DESCRIPTION_LENGTH).map(Some)
        }
        _ => Ok(None),
    }
}

/// Owners cannot leave their own club.
pub fn validate_can_leave(member_role: &str) -> Result<(), CoreError> {
    if member_role == ROLE_OWNER {
        return Err(CoreError::Conflict(
            "The club owner cannot leave the club".to_string(),
        ));
    }
    Ok(())
}
