use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `live_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LiveComment {
    pub id: DbId,
    pub stream_id: DbId,
    pub user_id: UserId,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for posting a chat message.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub message: String,
}
