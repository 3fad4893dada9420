use anyhow::Context;
use dotenvy::dotenv;

use rest_api::config::app_config::AppConfig;
use rest_api::config::database_config;
use rest_api::setup::dependency_injection::DependencyContainer;
use rest_api::setup::startup::{self, StartupError};

/// REST API Entry Point
///
/// Loads configuration, connects to MongoDB, then serves until Ctrl+C.
/// Exits with status 1 when any startup step fails.
#[tokio::main]
async fn main() {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    if let Err(err) = run().await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // 3. Load configuration
    let config = AppConfig::from_env().context("invalid configuration")?;
    let auth = config.auth.clone();

    // 4. Initialize database, wire dependencies, run server
    startup::start(
        config,
        move |database| async move {
            let db = database_config::init_database(&database).await?;
            Ok::<_, StartupError>(DependencyContainer::new(db, &auth))
        },
        shutdown_signal(),
    )
    .await
    .context("server startup failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
