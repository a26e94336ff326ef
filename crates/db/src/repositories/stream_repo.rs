//! Repository for the `streams` table.

use roast_core::streams::{STATUS_ENDED, STATUS_LIVE};
use roast_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::stream::Stream;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, live_input_id, title, playback_url, status, viewer_count, \
                       started_at, ended_at, created_at";

/// Provides CRUD operations for broadcast streams.
pub struct StreamRepo;

impl StreamRepo {
    /// Record a new live broadcast, returning the created row.
    ///
    /// `title` must already be validated.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        live_input_id: &str,
        title: &str,
        playback_url: Option<&str>,
    ) -> Result<Stream, sqlx::Error> {
        let query = format!(
            "INSERT INTO streams (user_id, live_input_id, title, playback_url, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stream>(&query)
            .bind(user_id)
            .bind(live_input_id)
            .bind(title)
            .bind(playback_url)
            .bind(STATUS_LIVE)
            .fetch_one(pool)
            .await
    }

    /// Find a stream by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stream>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM streams WHERE id = $1");
        sqlx::query_as::<_, Stream>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live broadcasts, newest first.
    pub async fn list_live(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Stream>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM streams
             WHERE status = $1
             ORDER BY started_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Stream>(&query)
            .bind(STATUS_LIVE)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a live stream as ended.
    ///
    /// Returns `None` if the stream does not exist or is not live.
    pub async fn end(pool: &PgPool, id: DbId) -> Result<Option<Stream>, sqlx::Error> {
        let query = format!(
            "UPDATE streams SET status = $2, ended_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stream>(&query)
            .bind(id)
            .bind(STATUS_ENDED)
            .bind(STATUS_LIVE)
            .fetch_optional(pool)
            .await
    }
}
