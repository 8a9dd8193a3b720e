//! Repository for the `measurements` table.

use sqlx::SqlitePool;
use tailorshop_core::types::DbId;

use crate::models::measurement::{CreateMeasurement, Measurement, MeasurementRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, dress_id, measurements, created_at";

/// Provides create/read operations for measurements.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Insert a new measurement, returning the created row.
    ///
    /// There is no uniqueness constraint: repeated submissions produce
    /// repeated rows.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMeasurement,
    ) -> Result<Measurement, sqlx::Error> {
        let query = format!(
            "INSERT INTO measurements (account_id, dress_id, measurements)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(input.account_id)
            .bind(input.dress_id)
            .bind(&input.measurements)
            .fetch_one(pool)
            .await
    }

    /// List the measurements one account submitted for one dress, oldest first.
    pub async fn list_for_account_and_dress(
        pool: &SqlitePool,
        account_id: DbId,
        dress_id: DbId,
    ) -> Result<Vec<Measurement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM measurements
             WHERE account_id = ?1 AND dress_id = ?2
             ORDER BY id"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(account_id)
            .bind(dress_id)
            .fetch_all(pool)
            .await
    }

    /// List the measurement requests submitted for any dress owned by a
    /// tailor, newest first.
    pub async fn list_requests_for_tailor(
        pool: &SqlitePool,
        tailor_id: DbId,
    ) -> Result<Vec<MeasurementRequest>, sqlx::Error> {
        sqlx::query_as::<_, MeasurementRequest>(
            "SELECT m.id, a.username AS customer_username, d.id AS dress_id,
                    d.name AS dress_name, m.measurements, m.created_at
             FROM measurements m
             JOIN dresses d ON d.id = m.dress_id
             JOIN accounts a ON a.id = m.account_id
             WHERE d.tailor_id = ?1
             ORDER BY m.id DESC",
        )
        .bind(tailor_id)
        .fetch_all(pool)
        .await
    }
}
