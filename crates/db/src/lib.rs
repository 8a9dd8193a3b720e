//! SQLite persistence for the tailor shop: pool construction, migrations,
//! row models, repositories, and whole-file backup/restore.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod backup;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "db.sqlite3";

/// Default maximum number of pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database location and pool sizing.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    /// Load database configuration from environment variables.
    ///
    /// | Env Var              | Default      |
    /// |----------------------|--------------|
    /// | `DATABASE_PATH`      | `db.sqlite3` |
    /// | `DB_MAX_CONNECTIONS` | `5`          |
    pub fn from_env() -> Self {
        let path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into())
            .into();

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            path,
            max_connections,
        }
    }
}

/// Create a connection pool for the configured database file, creating the
/// file if it does not exist.
///
/// The rollback journal is used instead of WAL so that every committed
/// transaction lives in the main database file, which is what
/// [`backup::backup_database`] copies.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Delete);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Run a trivial query to verify the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
