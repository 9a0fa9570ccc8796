//! # Mentorship API Main Entry Point
//!
//! Loads configuration, initializes telemetry and the database, then either
//! serves the API or just applies migrations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mentorship::{config::ConfigLoader, db, server::run_server, telemetry};

/// Mentor/student assignment service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Apply pending migrations and serve the HTTP API (default)
    #[default]
    Serve,
    /// Apply pending migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;

    telemetry::init_tracing(&config).context("initializing telemetry")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = db::init_pool(&config)
        .await
        .context("initializing database connection pool")?;
    db::run_migrations(&db).await?;

    match cli.command.unwrap_or_default() {
        Command::Migrate => {
            tracing::info!("Migrations complete");
            Ok(())
        }
        Command::Serve => run_server(config, db).await,
    }
}
