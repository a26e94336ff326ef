//! Appeal status constants, transition rules and validation.

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::trimmed_text;

/// Initial status of a newly submitted appeal.
pub const STATUS_PENDING: &str = "pending";
/// A moderator upheld the appeal.
pub const STATUS_APPROVED: &str = "approved";
/// A moderator denied the appeal.
pub const STATUS_REJECTED: &str = "rejected";

pub const MIN_REASON_LENGTH: u64 = 10;
pub const MAX_REASON_LENGTH: u64 = 2000;

/// What an appeal is filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealTarget {
    Strike(DbId),
    Violation(DbId),
}

/// Resolve the appeal target from the optional ids in a request.
///
/// Exactly one of `strike_id` / `violation_id` must be set.
pub fn resolve_target(
    strike_id: Option<DbId>,
    violation_id: Option<DbId>,
) -> Result<AppealTarget, CoreError> {
    match (strike_id, violation_id) {
        (Some(id), None) => Ok(AppealTarget::Strike(id)),
        (None, Some(id)) => Ok(AppealTarget::Violation(id)),
        (None, None) => Err(CoreError::Validation(
            "An appeal must reference a strike_id or a violation_id".to_string(),
        )),
        (Some(_), Some(_)) => Err(CoreError::Validation(
            "An appeal may reference only one of strike_id or violation_id".to_string(),
        )),
    }
}

/// Validate and normalise the appellant's reason.
pub fn validate_reason(reason: &str) -> Result<String, CoreError> {
    trimmed_text("reason", reason, MIN_REASON_LENGTH, MAX_REASON_LENGTH)
}

/// Returns the statuses `from_status` may transition to.
///
/// - `pending` -> `approved`, `rejected`
/// - `approved` and `rejected` are final.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_APPROVED, STATUS_REJECTED],
        _ => &[],
    }
}

/// Validate that an appeal may move from `current` to `next`.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition appeal from '{current}' to '{next}'. Allowed transitions: {allowed:?}"
        )))
    }
}
