//! Repository for the `live_comments` table.

use roast_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::comment::LiveComment;

const COLUMNS: &str = "id, stream_id, user_id, message, created_at";

/// Provides CRUD operations for live chat comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        stream_id: DbId,
        user_id: UserId,
        message: &str,
    ) -> Result<LiveComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO live_comments (stream_id, user_id, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveComment>(&query)
            .bind(stream_id)
            .bind(user_id)
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// List comments for a stream in posting order.
    ///
    /// When `after` is set only comments with a greater id are returned, so
    /// the client can poll for new messages.
    pub async fn list_for_stream(
        pool: &PgPool,
        stream_id: DbId,
        after: Option<DbId>,
        limit: i64,
    ) -> Result<Vec<LiveComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM live_comments
             WHERE stream_id = $1 AND ($2::BIGINT IS NULL OR id > $2)
             ORDER BY id ASC
             LIMIT $3"
        );
        sqlx::query_as::<_, LiveComment>(&query)
            .bind(stream_id)
            .bind(after)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a comment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LiveComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM live_comments WHERE id = $1");
        sqlx::query_as::<_, LiveComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM live_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
