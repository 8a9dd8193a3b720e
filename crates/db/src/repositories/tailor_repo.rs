//! Repository for the `tailors` table.

use sqlx::SqlitePool;
use tailorshop_core::types::DbId;

use crate::models::tailor::{CreateTailor, Tailor, TailorProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, bio";

/// Provides create/read operations for tailors.
pub struct TailorRepo;

impl TailorRepo {
    /// Insert a new tailor, returning the created row.
    ///
    /// Fails with a unique violation when the account already is a tailor.
    pub async fn create(pool: &SqlitePool, input: &CreateTailor) -> Result<Tailor, sqlx::Error> {
        let query = format!(
            "INSERT INTO tailors (account_id, bio)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tailor>(&query)
            .bind(input.account_id)
            .bind(&input.bio)
            .fetch_one(pool)
            .await
    }

    /// Find a tailor by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Tailor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tailors WHERE id = ?1");
        sqlx::query_as::<_, Tailor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the tailor profile linked to an account, if that account is a tailor.
    pub async fn find_by_account_id(
        pool: &SqlitePool,
        account_id: DbId,
    ) -> Result<Option<Tailor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tailors WHERE account_id = ?1");
        sqlx::query_as::<_, Tailor>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tailor together with its account's username.
    pub async fn find_profile(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TailorProfile>, sqlx::Error> {
        sqlx::query_as::<_, TailorProfile>(
            "SELECT t.id, t.account_id, a.username, t.bio
             FROM tailors t
             JOIN accounts a ON a.id = t.account_id
             WHERE t.id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
