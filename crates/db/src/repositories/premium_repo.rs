//! Repository for the `premium_subscriptions` table.

use roast_core::premium::{STATUS_ACTIVE, STATUS_CANCELLED};
use roast_core::types::{Timestamp, UserId};
use sqlx::PgPool;

use crate::models::premium::PremiumSubscription;

const COLUMNS: &str = "id, user_id, tier, status, started_at, expires_at, cancelled_at";

/// Provides subscription management for premium badges.
pub struct PremiumRepo;

impl PremiumRepo {
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<PremiumSubscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM premium_subscriptions WHERE user_id = $1");
        sqlx::query_as::<_, PremiumSubscription>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Activate (or re-activate) the user's subscription at `tier`.
    pub async fn subscribe(
        pool: &PgPool,
        user_id: UserId,
        tier: &str,
        expires_at: Option<Timestamp>,
    ) -> Result<PremiumSubscription, sqlx::Error> {
        let query = format!(
            "INSERT INTO premium_subscriptions (user_id, tier, status, expires_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_premium_subscriptions_user_id
             DO UPDATE SET tier = EXCLUDED.tier,
                           status = EXCLUDED.status,
                           expires_at = EXCLUDED.expires_at,
                           started_at = NOW(),
                           cancelled_at = NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PremiumSubscription>(&query)
            .bind(user_id)
            .bind(tier)
            .bind(STATUS_ACTIVE)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Cancel the user's subscription. Returns `None` if they have none.
    pub async fn cancel(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<PremiumSubscription>, sqlx::Error> {
        let query = format!(
            "UPDATE premium_subscriptions
             SET status = $2, cancelled_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PremiumSubscription>(&query)
            .bind(user_id)
            .bind(STATUS_CANCELLED)
            .fetch_optional(pool)
            .await
    }
}
