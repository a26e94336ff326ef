//! Follower graph rules.

use crate::error::CoreError;
use crate::types::UserId;

/// Reject attempts to follow oneself.
pub fn validate_follow(follower: UserId, target: UserId) -> Result<(), CoreError> {
    if follower == target {
        return Err(CoreError::Validation("You cannot follow yourself".to_string()));
    }
    Ok(())
}
