//! Repository for the `content_safety_violations` and
//! `content_safety_strikes` tables.

use roast_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::moderation::{CreateStrike, CreateViolation, Strike, Violation};

const VIOLATION_COLUMNS: &str = "id, user_id, stream_id, violation_type, description, created_at";

const STRIKE_COLUMNS: &str =
    "id, user_id, violation_id, reason, severity, is_active, expires_at, created_at";

/// Provides CRUD operations for content-safety records.
pub struct ModerationRepo;

impl ModerationRepo {
    // -- violations --

    /// Record a violation. `violation_type` and `description` must already
    /// be validated.
    pub async fn create_violation(
        pool: &PgPool,
        input: &CreateViolation,
    ) -> Result<Violation, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_safety_violations (user_id, stream_id, violation_type, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {VIOLATION_COLUMNS}"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(input.user_id)
            .bind(input.stream_id)
            .bind(&input.violation_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_violation(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Violation>, sqlx::Error> {
        let query = format!("SELECT {VIOLATION_COLUMNS} FROM content_safety_violations WHERE id = $1");
        sqlx::query_as::<_, Violation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_violations_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<Violation>, sqlx::Error> {
        let query = format!(
            "SELECT {VIOLATION_COLUMNS} FROM content_safety_violations
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    // -- strikes --

    /// Issue a strike. `reason` and `severity` must already be validated.
    pub async fn create_strike(pool: &PgPool, input: &CreateStrike) -> Result<Strike, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_safety_strikes (user_id, violation_id, reason, severity, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {STRIKE_COLUMNS}"
        );
        sqlx::query_as::<_, Strike>(&query)
            .bind(input.user_id)
            .bind(input.violation_id)
            .bind(&input.reason)
            .bind(&input.severity)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_strike(pool: &PgPool, id: DbId) -> Result<Option<Strike>, sqlx::Error> {
        let query = format!("SELECT {STRIKE_COLUMNS} FROM content_safety_strikes WHERE id = $1");
        sqlx::query_as::<_, Strike>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_strikes_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<Strike>, sqlx::Error> {
        let query = format!(
            "SELECT {STRIKE_COLUMNS} FROM content_safety_strikes
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Strike>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Severities of the user's active, unexpired strikes.
    pub async fn active_strike_severities(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT severity FROM content_safety_strikes
             WHERE user_id = $1
               AND is_active = true
               AND (expires_at IS NULL OR expires_at > NOW())",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
