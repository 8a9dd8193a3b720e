//! Account entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailorshop_core::types::{DbId, Timestamp};

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER hand this to a template directly.
/// Use [`AccountSummary`] for anything rendered.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Safe account representation for rendered pages (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

/// DTO for creating a new account.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
