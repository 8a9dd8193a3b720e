//! Login session model and DTOs.

use sqlx::FromRow;
use tailorshop_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table.
///
/// Only the SHA-256 hash of the session token is stored; the plaintext
/// token lives in the client's cookie.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
