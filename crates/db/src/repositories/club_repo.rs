//! Repository for the `clubs` and `club_members` tables.

use roast_core::clubs::{ROLE_MEMBER, ROLE_OWNER};
use roast_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::club::{Club, ClubMember, ClubSummary};

const COLUMNS: &str = "id, owner_id, name, description, created_at";

const MEMBER_COLUMNS: &str = "club_id, user_id, role, joined_at";

/// Provides CRUD operations for clubs and their members.
pub struct ClubRepo;

impl ClubRepo {
    /// Create a club and enrol the owner, in one transaction.
    pub async fn create(
        pool: &PgPool,
        owner_id: UserId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Club, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO clubs (owner_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let club = sqlx::query_as::<_, Club>(&query)
            .bind(owner_id)
            .bind(name)
            .bind(description)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO club_members (club_id, user_id, role) VALUES ($1, $2, $3)")
            .bind(club.id)
            .bind(owner_id)
            .bind(ROLE_OWNER)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(club)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Club>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clubs WHERE id = $1");
        sqlx::query_as::<_, Club>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List clubs with member counts, largest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ClubSummary>, sqlx::Error> {
        sqlx::query_as::<_, ClubSummary>(
            "SELECT c.id, c.owner_id, c.name, c.description, c.created_at,
                    COUNT(m.user_id) AS member_count
             FROM clubs c
             LEFT JOIN club_members m ON m.club_id = c.id
             GROUP BY c.id
             ORDER BY member_count DESC, c.created_at DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Join a club as a regular member. Joining twice is a no-op.
    pub async fn join(pool: &PgPool, club_id: DbId, user_id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO club_members (club_id, user_id, role)
             VALUES ($1, $2, $3)
             ON CONFLICT (club_id, user_id) DO NOTHING",
        )
        .bind(club_id)
        .bind(user_id)
        .bind(ROLE_MEMBER)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_member(
        pool: &PgPool,
        club_id: DbId,
        user_id: UserId,
    ) -> Result<Option<ClubMember>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM club_members WHERE club_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ClubMember>(&query)
            .bind(club_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a membership. Returns `true` if one existed.
    pub async fn leave(pool: &PgPool, club_id: DbId, user_id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM club_members WHERE club_id = $1 AND user_id = $2")
            .bind(club_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_members(
        pool: &PgPool,
        club_id: DbId,
    ) -> Result<Vec<ClubMember>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM club_members WHERE club_id = $1 ORDER BY joined_at ASC"
        );
        sqlx::query_as::<_, ClubMember>(&query)
            .bind(club_id)
            .fetch_all(pool)
            .await
    }
}
