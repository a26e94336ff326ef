//! Content-safety violation and strike models.

use roast_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `content_safety_violations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Violation {
    pub id: DbId,
    pub user_id: UserId,
    pub stream_id: Option<DbId>,
    pub violation_type: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for recording a violation.
#[derive(Debug, Deserialize)]
pub struct CreateViolation {
    pub user_id: UserId,
    pub stream_id: Option<DbId>,
    pub violation_type: String,
    pub description: String,
}

/// A row from the `content_safety_strikes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Strike {
    pub id: DbId,
    pub user_id: UserId,
    pub violation_id: Option<DbId>,
    pub reason: String,
    pub severity: String,
    pub is_active: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for issuing a strike.
#[derive(Debug, Deserialize)]
pub struct CreateStrike {
    pub user_id: UserId,
    pub violation_id: Option<DbId>,
    pub reason: String,
    pub severity: String,
    pub expires_at: Option<Timestamp>,
}

/// Summary of a user's account standing.
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub user_id: UserId,
    pub active_strikes: usize,
    pub status: &'static str,
    pub can_broadcast: bool,
}
