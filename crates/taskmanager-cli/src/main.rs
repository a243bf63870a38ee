use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskmanager=info,taskmanager_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run CLI
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize database (optional)
    let db = match cli.database_url {
        Some(ref db_url) => {
            let database = taskmanager_db::Database::new(db_url).await?;
            tracing::debug!("Connected to database");
            Some(Arc::new(database))
        }
        None => None,
    };

    // Execute command
    commands::execute(cli.command, db).await
}
