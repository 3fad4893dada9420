use std::future::Future;

use persistence::db::{DatabaseConfig, DatabaseError};

use crate::config::ConfigError;
use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

/// Any failure before the server is serving. The binary exits with status 1.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("startup.config: {0}")]
    Config(#[from] ConfigError),
    #[error("startup.database: {0}")]
    Database(#[from] DatabaseError),
    #[error("startup.bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("startup.serve: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connects to the database, then binds and serves.
///
/// The listener is never bound when `connect` fails.
pub async fn start<C, Fut, S>(config: AppConfig, connect: C, shutdown: S) -> Result<(), StartupError>
where
    C: FnOnce(DatabaseConfig) -> Fut,
    Fut: Future<Output = Result<DependencyContainer, StartupError>>,
    S: Future<Output = ()> + Send,
{
    tracing::info!(database = %config.database.database_name, "connecting to database");
    let container = connect(config.database.clone()).await?;
    tracing::info!("database ready");

    Server::run(config, container, shutdown).await
}
