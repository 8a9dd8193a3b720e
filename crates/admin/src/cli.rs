use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tailorshop_core::price::Price;
use tailorshop_core::types::DbId;
use tailorshop_db::DEFAULT_DATABASE_PATH;

#[derive(Debug, Parser)]
#[command(name = "tailorshop-admin", version)]
#[command(about = "Maintenance commands for the tailor shop database")]
pub struct Cli {
    /// SQLite database file.
    #[arg(long, env = "DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH, global = true)]
    pub database: PathBuf,

    /// Directory under which `backups/` is created.
    #[arg(long, env = "BASE_DIR", default_value = ".", global = true)]
    pub base_dir: PathBuf,

    /// Directory that dress images are copied into.
    #[arg(long, env = "MEDIA_ROOT", default_value = "media", global = true)]
    pub media_root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy the database file into `<base-dir>/backups/`.
    Backup,

    /// Overwrite the database file with a backup.
    Restore {
        /// Backup file to restore from.
        backup_file: PathBuf,
    },

    /// Make an existing account a tailor.
    CreateTailor {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        bio: String,
    },

    /// Add a dress to a tailor's catalog.
    AddDress {
        #[arg(long)]
        tailor_id: DbId,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Decimal price with at most two fractional digits, e.g. `100.00`.
        #[arg(long)]
        price: Price,
        /// Image file copied into `<media-root>/dresses/`.
        #[arg(long)]
        image: Option<PathBuf>,
    },
}
