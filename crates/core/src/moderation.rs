//! Content-safety violation and strike constants, plus account standing.
//!
//! A user's standing is derived from their active, unexpired strikes:
//!
//! | Active strikes            | Standing     |
//! |---------------------------|--------------|
//! | 0                         | `good`       |
//! | 1                         | `warned`     |
//! | 2                         | `restricted` |
//! | 3+ or any `severe` strike | `suspended`  |

use crate::error::CoreError;
use crate::validation::{one_of, trimmed_text};

// ---------------------------------------------------------------------------
// Violation types
// ---------------------------------------------------------------------------

pub const VIOLATION_NUDITY: &str = "nudity";
pub const VIOLATION_VIOLENCE: &str = "violence";
pub const VIOLATION_HATE_SPEECH: &str = "hate_speech";
pub const VIOLATION_HARASSMENT: &str = "harassment";
pub const VIOLATION_SPAM: &str = "spam";
pub const VIOLATION_SELF_HARM: &str = "self_harm";
pub const VIOLATION_OTHER: &str = "other";

pub const VALID_VIOLATION_TYPES: &[&str] = &[
    VIOLATION_NUDITY,
    VIOLATION_VIOLENCE,
    VIOLATION_HATE_SPEECH,
    VIOLATION_HARASSMENT,
    VIOLATION_SPAM,
    VIOLATION_SELF_HARM,
    VIOLATION_OTHER,
];

// ---------------------------------------------------------------------------
// Strike severities
// ---------------------------------------------------------------------------

pub const SEVERITY_WARNING: &str = "warning";
pub const SEVERITY_MINOR: &str = "minor";
pub const SEVERITY_MAJOR: &str = "major";
pub const SEVERITY_SEVERE: &str = "severe";

pub const VALID_SEVERITIES: &[&str] = &[
    SEVERITY_WARNING,
    SEVERITY_MINOR,
    SEVERITY_MAJOR,
    SEVERITY_SEVERE,
];

// ---------------------------------------------------------------------------
// Standing
// ---------------------------------------------------------------------------

pub const STANDING_GOOD: &str = "good";
pub const STANDING_WARNED: &str = "warned";
pub const STANDING_RESTRICTED: &str = "restricted";
pub const STANDING_SUSPENDED: &str = "suspended";

/// Active strikes at which an account is suspended.
pub const SUSPENSION_THRESHOLD: usize = 3;

/// Maximum length of free-text descriptions and strike reasons.
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Derive account standing from the severities of active strikes.
pub fn standing<S: AsRef<str>>(active_severities: &[S]) -> &'static str {
    let severe = active_severities
        .iter()
        .any(|s| s.as_ref() == SEVERITY_SEVERE);
    match active_severities.len() {
        _ if severe => STANDING_SUSPENDED,
        0 => STANDING_GOOD,
        1 => STANDING_WARNED,
        n if n < SUSPENSION_THRESHOLD => STANDING_RESTRICTED,
        _ => STANDING_SUSPENDED,
    }
}

/// Whether a user with the given standing may go live.
pub fn can_broadcast(standing: &str) -> bool {
    standing != STANDING_SUSPENDED
}

pub fn validate_violation_type(violation_type: &str) -> Result<(), CoreError> {
    one_of("violation type", violation_type, VALID_VIOLATION_TYPES)
}

pub fn validate_severity(severity: &str) -> Result<(), CoreError> {
    one_of("severity", severity, VALID_SEVERITIES)
}

/// Validate and normalise a strike reason or violation description.
pub fn validate_description(description: &str) -> Result<String, CoreError> {
    trimmed_text("description", description, 1, MAX_DESCRIPTION_LENGTH)
}
