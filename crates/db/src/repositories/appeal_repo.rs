//! Repository for the `appeals` table.

use roast_core::appeals::{AppealTarget, STATUS_APPROVED, STATUS_PENDING};
use roast_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::appeal::Appeal;

const COLUMNS: &str = "id, user_id, strike_id, violation_id, reason, status, reviewer_notes, \
                       created_at, reviewed_at";

/// Provides CRUD operations for moderation appeals.
pub struct AppealRepo;

impl AppealRepo {
    /// Submit an appeal. `reason` must already be validated.
    ///
    /// A second pending appeal on the same target violates
    /// `uq_appeals_pending_*`.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        target: AppealTarget,
        reason: &str,
    ) -> Result<Appeal, sqlx::Error> {
        let (strike_id, violation_id) = match target {
            AppealTarget::Strike(id) => (Some(id), None),
            AppealTarget::Violation(id) => (None, Some(id)),
        };
        let query = format!(
            "INSERT INTO appeals (user_id, strike_id, violation_id, reason)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(user_id)
            .bind(strike_id)
            .bind(violation_id)
            .bind(reason)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appeal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appeals WHERE id = $1");
        sqlx::query_as::<_, Appeal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The user's appeals, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: UserId) -> Result<Vec<Appeal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appeals WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Pending appeals, oldest first (review queue order).
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Appeal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appeals WHERE status = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(STATUS_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Record a moderator decision on a pending appeal.
    ///
    /// Approving an appeal against a strike deactivates that strike in the
    /// same transaction. Returns `None` if the appeal is no longer pending.
    pub async fn resolve(
        pool: &PgPool,
        id: DbId,
        status: &str,
        reviewer_notes: Option<&str>,
    ) -> Result<Option<Appeal>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE appeals SET status = $2, reviewer_notes = $3, reviewed_at = NOW()
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        let appeal = sqlx::query_as::<_, Appeal>(&query)
            .bind(id)
            .bind(status)
            .bind(reviewer_notes)
            .bind(STATUS_PENDING)
            .fetch_optional(&mut *tx)
            .await?;

        let lifted_strike = appeal
            .as_ref()
            .filter(|a| a.status == STATUS_APPROVED)
            .and_then(|a| a.strike_id);
        if let Some(strike_id) = lifted_strike {
            sqlx::query("UPDATE content_safety_strikes SET is_active = false WHERE id = $1")
                .bind(strike_id)
                .execute(&mut *tx)
                .await?;
            tracing::info!(appeal_id = id, strike_id, "Strike lifted by approved appeal");
        }

        tx.commit().await?;
        Ok(appeal)
    }
}
