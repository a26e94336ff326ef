//! Premium subscription tiers and badge derivation.

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::one_of;

pub const TIER_SUPPORTER: &str = "supporter";
pub const TIER_LEGEND: &str = "legend";

pub const VALID_TIERS: &[&str] = &[TIER_SUPPORTER, TIER_LEGEND];

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_CANCELLED: &str = "cancelled";

pub fn validate_tier(tier: &str) -> Result<(), CoreError> {
    one_of("tier", tier, VALID_TIERS)
}

/// Badge shown next to a premium user's name.
pub fn badge_for_tier(tier: &str) -> Option<&'static str> {
    match tier {
        TIER_SUPPORTER => Some("flame"),
        TIER_LEGEND => Some("crown"),
        _ => None,
    }
}

/// A subscription grants premium while active and not past `expires_at`.
pub fn is_premium(status: &str, expires_at: Option<Timestamp>, now: Timestamp) -> bool {
    status == STATUS_ACTIVE && expires_at.is_none_or(|exp| exp > now)
}
