//! Repository for the `push_tokens` table.

use roast_core::types::UserId;
use sqlx::PgPool;

use crate::models::push_token::PushToken;

const COLUMNS: &str = "id, user_id, token, platform, created_at, updated_at";

/// Provides device registration for push notifications.
pub struct PushTokenRepo;

impl PushTokenRepo {
    /// Register a device token, refreshing the platform and `updated_at`
    /// when the user already registered it.
    pub async fn upsert(
        pool: &PgPool,
        user_id: UserId,
        token: &str,
        platform: &str,
    ) -> Result<PushToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO push_tokens (user_id, token, platform)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_push_tokens_user_token
             DO UPDATE SET platform = EXCLUDED.platform, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PushToken>(&query)
            .bind(user_id)
            .bind(token)
            .bind(platform)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<PushToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM push_tokens WHERE user_id = $1 ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, PushToken>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a device token. Returns `true` if it was registered.
    pub async fn delete(pool: &PgPool, user_id: UserId, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM push_tokens WHERE user_id = $1 AND token = $2")
            .bind(user_id)
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
