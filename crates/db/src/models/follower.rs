use roast_core::types::{Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `followers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Follower {
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: Timestamp,
}

/// Follower / following totals for a profile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowCounts {
    pub followers: i64,
    pub following: i64,
}
