use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clubs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Club {
    pub id: DbId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A club with its member count, used for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClubSummary {
    pub id: DbId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub member_count: i64,
}

/// A row from the `club_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClubMember {
    pub club_id: DbId,
    pub user_id: UserId,
    pub role: String,
    pub joined_at: Timestamp,
}

/// DTO for creating a club.
#[derive(Debug, Deserialize)]
pub struct CreateClub {
    pub name: String,
    pub description: Option<String>,
}
