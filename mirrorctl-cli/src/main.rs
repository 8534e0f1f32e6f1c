//! mirrorctl CLI - operate the forum mirror database
//!
//! Subcommands:
//! - `migrate` - create the mirrored tables and indexes
//! - `ping` - verify the configured database is reachable

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mirrorctl_core::MirrorConfig;
use mirrorctl_db::pool::create_pool_from_config;

#[derive(Parser, Debug)]
#[command(
    name = "mirrorctl",
    author,
    version,
    about = "Local-storage tooling for the forum mirror"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the mirrored tables and indexes (idempotent)
    Migrate,
    /// Check connectivity against the configured database
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = MirrorConfig::load().context("failed to load mirror config")?;
    let pool = create_pool_from_config(&config)
        .await
        .context("failed to connect to the mirror database")?;

    match cli.command {
        Commands::Migrate => {
            mirrorctl_db::migrations::run(&pool)
                .await
                .context("migrations failed")?;
            info!("mirror schema is up to date");
        }
        Commands::Ping => {
            let (one,): (i32,) = sqlx::query_as("SELECT 1")
                .fetch_one(&pool)
                .await
                .context("ping query failed")?;
            anyhow::ensure!(one == 1, "unexpected ping response");

            if let Some(source) = &config.mirror.source_name {
                info!(source = %source, "database reachable");
            } else {
                info!("database reachable");
            }
        }
    }

    Ok(())
}
