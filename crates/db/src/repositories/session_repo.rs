//! Repository for the `sessions` table.

use sqlx::SqlitePool;
use tailorshop_core::types::{DbId, Timestamp};

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, token_hash, expires_at, created_at";

/// Provides CRUD operations for login sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (account_id, token_hash, expires_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.account_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token hash that has not expired at `now`.
    pub async fn find_active_by_token_hash(
        pool: &SqlitePool,
        hash: &str,
        now: Timestamp,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE token_hash = ?1
               AND julianday(expires_at) > julianday(?2)"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(hash)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with this token hash. Returns `true` if a row was removed.
    pub async fn delete_by_token_hash(pool: &SqlitePool, hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?1")
            .bind(hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the sessions held by an account, expired ones included.
    pub async fn count_for_account(pool: &SqlitePool, account_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE account_id = ?1")
            .bind(account_id)
            .fetch_one(pool)
            .await
    }

    /// Delete sessions that expired before `now`. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &SqlitePool, now: Timestamp) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM sessions WHERE julianday(expires_at) <= julianday(?1)")
                .bind(now)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
