use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tailorshop_admin::cli::{Cli, Command};
use tailorshop_admin::commands::{self, NewDress};
use tailorshop_db::{DbConfig, DbPool};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tailorshop_admin=info,tailorshop_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Backup => {
            let destination = commands::backup(&cli.database, &cli.base_dir).await?;
            println!("Database backed up to {}", destination.display());
        }
        Command::Restore { backup_file } => {
            commands::restore(&backup_file, &cli.database).await?;
            println!("Database restored from {}", backup_file.display());
        }
        Command::CreateTailor { ref username, ref bio } => {
            let pool = open_database(&cli).await?;
            let tailor = commands::create_tailor(&pool, &username, &bio).await?;
            println!("Created tailor {} for account '{username}'", tailor.id);
            pool.close().await;
        }
        Command::AddDress {
            tailor_id,
            ref name,
            ref description,
            price,
            ref image,
        } => {
            let pool = open_database(&cli).await?;
            let input = NewDress {
                tailor_id,
                name: name.clone(),
                description: description.clone(),
                price,
                image: image.clone(),
            };
            let dress = commands::add_dress(&pool, &cli.media_root, input).await?;
            println!("Added dress {} '{}' at {price}", dress.id, dress.name);
            pool.close().await;
        }
    }
    Ok(())
}

async fn open_database(cli: &Cli) -> anyhow::Result<DbPool> {
    let config = DbConfig {
        path: cli.database.clone(),
        max_connections: 1,
    };
    let pool = tailorshop_db::create_pool(&config).await?;
    tailorshop_db::run_migrations(&pool).await?;
    Ok(pool)
}
