//! Repository for the `dresses` table.

use sqlx::SqlitePool;
use tailorshop_core::types::DbId;

use crate::models::dress::{CreateDress, Dress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tailor_id, name, description, price_cents, image_path";

/// Provides create/read operations for dresses.
pub struct DressRepo;

impl DressRepo {
    /// Insert a new dress, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateDress) -> Result<Dress, sqlx::Error> {
        let query = format!(
            "INSERT INTO dresses (tailor_id, name, description, price_cents, image_path)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dress>(&query)
            .bind(input.tailor_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price.cents())
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a dress by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Dress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dresses WHERE id = ?1");
        sqlx::query_as::<_, Dress>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a dress by exact name. Returns the oldest match when names repeat.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Dress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dresses WHERE name = ?1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Dress>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every dress in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Dress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dresses ORDER BY id");
        sqlx::query_as::<_, Dress>(&query).fetch_all(pool).await
    }

    /// List the dresses owned by one tailor in insertion order.
    pub async fn list_by_tailor(
        pool: &SqlitePool,
        tailor_id: DbId,
    ) -> Result<Vec<Dress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dresses WHERE tailor_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Dress>(&query)
            .bind(tailor_id)
            .fetch_all(pool)
            .await
    }
}
