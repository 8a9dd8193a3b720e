//! Whole-file backup and restore of the SQLite database.
//!
//! Both operations are a single file copy. There is no verification,
//! compression, rotation, or locking against a running server.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Name of the directory, under the base directory, that holds backups.
pub const BACKUP_DIR_NAME: &str = "backups";

/// Extension used when the database file has none.
const DEFAULT_EXTENSION: &str = "sqlite3";

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// The file to restore from is not there. Nothing was modified.
    #[error("Backup file {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    /// The backup path and the database path name the same file. Nothing
    /// was modified.
    #[error("Backup file {} is the database file itself", .0.display())]
    SameFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the backup file name for a database taken at `taken_at`:
/// `db_backup_<YYYYMMDDHHMMSS>.<ext>`.
pub fn backup_file_name(db_path: &Path, taken_at: NaiveDateTime) -> String {
    let extension = db_path
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);
    format!(
        "db_backup_{}.{extension}",
        taken_at.format("%Y%m%d%H%M%S")
    )
}

/// Copy the database file into `<base_dir>/backups/`, creating the directory
/// when needed. Returns the path of the new backup.
///
/// Two backups taken within the same second share a name; the later one
/// overwrites the earlier.
pub async fn backup_database(
    db_path: &Path,
    base_dir: &Path,
    taken_at: NaiveDateTime,
) -> Result<PathBuf, BackupError> {
    let backup_dir = base_dir.join(BACKUP_DIR_NAME);
    tokio::fs::create_dir_all(&backup_dir).await?;

    let destination = backup_dir.join(backup_file_name(db_path, taken_at));
    let bytes = tokio::fs::copy(db_path, &destination).await?;

    tracing::info!(
        source = %db_path.display(),
        destination = %destination.display(),
        bytes,
        "Database backup written"
    );
    Ok(destination)
}

/// Overwrite the database file with the contents of `backup_file`.
///
/// Fails without touching the database with [`BackupError::SourceMissing`]
/// when `backup_file` does not exist, and with [`BackupError::SameFile`] when
/// both paths resolve to the same file (copying onto itself truncates it).
pub async fn restore_database(backup_file: &Path, db_path: &Path) -> Result<(), BackupError> {
    if !tokio::fs::try_exists(backup_file).await? {
        tracing::warn!(source = %backup_file.display(), "Backup file not found");
        return Err(BackupError::SourceMissing(backup_file.to_path_buf()));
    }

    if tokio::fs::try_exists(db_path).await? {
        let source = tokio::fs::canonicalize(backup_file).await?;
        let destination = tokio::fs::canonicalize(db_path).await?;
        if source == destination {
            tracing::warn!(path = %source.display(), "Refusing to restore a file onto itself");
            return Err(BackupError::SameFile(backup_file.to_path_buf()));
        }
    }

    let bytes = tokio::fs::copy(backup_file, db_path).await?;

    tracing::info!(
        source = %backup_file.display(),
        destination = %db_path.display(),
        bytes,
        "Database restored"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn file_name_keeps_database_extension() {
        let name = backup_file_name(Path::new("/srv/shop/db.sqlite3"), at(7, 5, 9));
        assert_eq!(name, "db_backup_20240309070509.sqlite3");

        let name = backup_file_name(Path::new("data/shop.db"), at(23, 59, 59));
        assert_eq!(name, "db_backup_20240309235959.db");
    }

    #[test]
    fn file_name_defaults_extension() {
        let name = backup_file_name(Path::new("database"), at(0, 0, 0));
        assert_eq!(name, "db_backup_20240309000000.sqlite3");
    }
}
