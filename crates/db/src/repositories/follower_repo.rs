//! Repository for the `followers` table.

use roast_core::types::UserId;
use sqlx::PgPool;

use crate::models::follower::{FollowCounts, Follower};

const COLUMNS: &str = "follower_id, following_id, created_at";

/// Provides operations on the follower graph.
pub struct FollowerRepo;

impl FollowerRepo {
    /// Follow `following_id`. Following twice is a no-op.
    ///
    /// Returns `true` if a new edge was created.
    pub async fn follow(
        pool: &PgPool,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO followers (follower_id, following_id)
             VALUES ($1, $2)
             ON CONFLICT (follower_id, following_id) DO NOTHING",
        )
        .bind(follower_id)
        .bind(following_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a follow edge. Returns `true` if one existed.
    pub async fn unfollow(
        pool: &PgPool,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM followers WHERE follower_id = $1 AND following_id = $2")
                .bind(follower_id)
                .bind(following_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn is_following(
        pool: &PgPool,
        follower_id: UserId,
        following_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM followers WHERE follower_id = $1 AND following_id = $2
             )",
        )
        .bind(follower_id)
        .bind(following_id)
        .fetch_one(pool)
        .await
    }

    /// Users who follow `user_id`, most recent first.
    pub async fn list_followers(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Follower>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM followers
             WHERE following_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Follower>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Users that `user_id` follows, most recent first.
    pub async fn list_following(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Follower>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM followers
             WHERE follower_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Follower>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn counts(pool: &PgPool, user_id: UserId) -> Result<FollowCounts, sqlx::Error> {
        let (followers, following): (i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM followers WHERE following_id = $1),
                (SELECT COUNT(*) FROM followers WHERE follower_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(FollowCounts {
            followers,
            following,
        })
    }
}
