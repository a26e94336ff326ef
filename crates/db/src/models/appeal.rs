use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appeals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appeal {
    pub id: DbId,
    pub user_id: UserId,
    pub strike_id: Option<DbId>,
    pub violation_id: Option<DbId>,
    pub reason: String,
    pub status: String,
    pub reviewer_notes: Option<String>,
    pub created_at: Timestamp,
    pub reviewed_at: Option<Timestamp>,
}

/// DTO for submitting an appeal.
#[derive(Debug, Deserialize)]
pub struct CreateAppeal {
    pub strike_id: Option<DbId>,
    pub violation_id: Option<DbId>,
    pub reason: String,
}

/// DTO for a moderator decision.
#[derive(Debug, Deserialize)]
pub struct ResolveAppeal {
    pub status: String,
    pub reviewer_notes: Option<String>,
}
