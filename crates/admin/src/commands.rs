//! Command implementations. Each returns the value the binary reports.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::Local;
use tailorshop_core::price::Price;
use tailorshop_core::types::DbId;
use tailorshop_db::backup::{self, BackupError};
use tailorshop_db::models::dress::{CreateDress, Dress};
use tailorshop_db::models::tailor::{CreateTailor, Tailor};
use tailorshop_db::repositories::{AccountRepo, DressRepo, TailorRepo};
use tailorshop_db::DbPool;

/// Media subdirectory holding dress images.
pub const DRESS_IMAGE_DIR: &str = "dresses";

/// Back up `db_path` into `<base_dir>/backups/`, named after the current
/// local time.
pub async fn backup(db_path: &Path, base_dir: &Path) -> Result<PathBuf, BackupError> {
    backup::backup_database(db_path, base_dir, Local::now().naive_local()).await
}

/// Overwrite `db_path` with `backup_file`.
pub async fn restore(backup_file: &Path, db_path: &Path) -> Result<(), BackupError> {
    backup::restore_database(backup_file, db_path).await
}

/// Give the account named `username` a tailor profile.
pub async fn create_tailor(pool: &DbPool, username: &str, bio: &str) -> anyhow::Result<Tailor> {
    let Some(account) = AccountRepo::find_by_username(pool, username).await? else {
        bail!("Account '{username}' does not exist");
    };
    if TailorRepo::find_by_account_id(pool, account.id).await?.is_some() {
        bail!("Account '{username}' is already a tailor");
    }

    let tailor = TailorRepo::create(
        pool,
        &CreateTailor {
            account_id: account.id,
            bio: bio.to_string(),
        },
    )
    .await?;

    tracing::info!(tailor_id = tailor.id, account_id = account.id, "Tailor created");
    Ok(tailor)
}

/// Input for [`add_dress`].
#[derive(Debug)]
pub struct NewDress {
    pub tailor_id: DbId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: Option<PathBuf>,
}

/// Add a dress to a tailor's catalog, copying its image (if any) into
/// `<media_root>/dresses/`. An existing image of the same file name is
/// replaced.
pub async fn add_dress(pool: &DbPool, media_root: &Path, input: NewDress) -> anyhow::Result<Dress> {
    if TailorRepo::find_by_id(pool, input.tailor_id).await?.is_none() {
        bail!("Tailor {} does not exist", input.tailor_id);
    }

    let image_path = match &input.image {
        Some(source) => store_image(media_root, source).await?,
        None => String::new(),
    };

    let dress = DressRepo::create(
        pool,
        &CreateDress {
            tailor_id: input.tailor_id,
            name: input.name,
            description: input.description,
            price: input.price,
            image_path,
        },
    )
    .await?;

    tracing::info!(dress_id = dress.id, tailor_id = dress.tailor_id, "Dress added");
    Ok(dress)
}

/// Copy `source` into the dress image directory and return its path relative
/// to `media_root`.
async fn store_image(media_root: &Path, source: &Path) -> anyhow::Result<String> {
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Image path {} has no file name", source.display()))?;

    let dir = media_root.join(DRESS_IMAGE_DIR);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let destination = dir.join(file_name);
    tokio::fs::copy(source, &destination)
        .await
        .with_context(|| format!("Failed to copy image {}", source.display()))?;

    Ok(format!("{DRESS_IMAGE_DIR}/{file_name}"))
}
