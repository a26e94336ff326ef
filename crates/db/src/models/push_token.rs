use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `push_tokens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PushToken {
    pub id: DbId,
    pub user_id: UserId,
    pub token: String,
    pub platform: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a device.
#[derive(Debug, Deserialize)]
pub struct RegisterPushToken {
    pub token: String,
    pub platform: String,
}
