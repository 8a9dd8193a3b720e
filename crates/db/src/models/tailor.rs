//! Tailor entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailorshop_core::types::DbId;

/// A row from the `tailors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tailor {
    pub id: DbId,
    pub account_id: DbId,
    pub bio: String,
}

/// A tailor joined with the username of its account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TailorProfile {
    pub id: DbId,
    pub account_id: DbId,
    pub username: String,
    pub bio: String,
}

/// DTO for creating a new tailor.
#[derive(Debug)]
pub struct CreateTailor {
    pub account_id: DbId,
    pub bio: String,
}
