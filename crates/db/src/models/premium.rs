use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `premium_subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PremiumSubscription {
    pub id: DbId,
    pub user_id: UserId,
    pub tier: String,
    pub status: String,
    pub started_at: Timestamp,
    pub expires_at: Option<Timestamp>,
    pub cancelled_at: Option<Timestamp>,
}

/// DTO for starting or changing a subscription.
#[derive(Debug, Deserialize)]
pub struct Subscribe {
    pub tier: String,
    pub expires_at: Option<Timestamp>,
}

/// Public badge information for a profile.
#[derive(Debug, Clone, Serialize)]
pub struct PremiumBadge {
    pub user_id: UserId,
    pub is_premium: bool,
    pub tier: Option<String>,
    pub badge: Option<&'static str>,
}
