//! Dress entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailorshop_core::price::Price;
use tailorshop_core::types::DbId;

/// A row from the `dresses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dress {
    pub id: DbId,
    pub tailor_id: DbId,
    pub name: String,
    pub description: String,
    /// Never negative; enforced by a CHECK constraint.
    pub price_cents: i64,
    /// Path relative to the media root, empty when the dress has no image.
    pub image_path: String,
}

/// DTO for creating a new dress.
#[derive(Debug)]
pub struct CreateDress {
    pub tailor_id: DbId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_path: String,
}
