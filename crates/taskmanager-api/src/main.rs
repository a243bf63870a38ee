use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskmanager_api::{routes, ApiConfig, ApiState};
use taskmanager_core::ListRepository;
use taskmanager_db::{Database, InMemoryRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskmanager_api=debug,taskmanager_core=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let config = ApiConfig::from_env()?;

    // Initialize storage
    let repository: Arc<dyn ListRepository> = match config.database_url {
        Some(ref db_url) => {
            let database = Database::new(db_url).await?;
            database.init_schema().await?;
            Arc::new(database)
        }
        None => {
            tracing::warn!("No DATABASE_URL provided, lists are kept in memory only");
            Arc::new(InMemoryRepository::new())
        }
    };

    // Build router
    let app = routes::create_router(ApiState::new(repository));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Task Manager API Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
