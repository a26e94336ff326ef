//! Broadcast stream models and DTOs.

use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `streams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stream {
    pub id: DbId,
    pub user_id: UserId,
    pub live_input_id: String,
    pub title: String,
    pub playback_url: Option<String>,
    pub status: String,
    pub viewer_count: i32,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording a new broadcast.
#[derive(Debug, Deserialize)]
pub struct CreateStream {
    pub live_input_id: String,
    pub title: String,
    pub playback_url: Option<String>,
}
