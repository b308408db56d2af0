use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod dates;
mod error;
mod extract;
mod log_filter;
mod models;
mod repositories;
mod routes;
mod state;
mod validation;


use common::database::{DatabaseConfig, init_pool_or_degrade};
use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    repositories::{UserRepository, run_migrations},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting exercise API service");

    let server_config = ServerConfig::from_env()?;

    // A database that is down at startup leaves the service running degraded
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool_or_degrade(&db_config).await?;

    match run_migrations(&pool).await {
        Ok(()) => info!("Database connection successful"),
        Err(e) => error!("Failed to prepare database schema: {}", e),
    }

    let app_state = AppState::new(UserRepository::new(pool));

    // Start the web server
    let app = routes::create_router(app_state);

    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Exercise API service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
