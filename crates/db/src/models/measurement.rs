//! Measurement entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailorshop_core::types::{DbId, Timestamp};

/// A row from the `measurements` table.
///
/// `measurements` is stored exactly as submitted; nothing parses it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub id: DbId,
    pub account_id: DbId,
    pub dress_id: DbId,
    pub measurements: String,
    pub created_at: Timestamp,
}

/// A measurement joined with the customer and dress it belongs to, as shown
/// on a tailor's work page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeasurementRequest {
    pub id: DbId,
    pub customer_username: String,
    pub dress_id: DbId,
    pub dress_name: String,
    pub measurements: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new measurement.
#[derive(Debug)]
pub struct CreateMeasurement {
    pub account_id: DbId,
    pub dress_id: DbId,
    pub measurements: String,
}
