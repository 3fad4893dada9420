use std::time::Duration;

use business::domain::errors::RepositoryError;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use thiserror::Error;
use tracing::{error, info};

pub const USERS_COLLECTION: &str = "users";
pub const INCOMES_COLLECTION: &str = "incomes";
pub const EXPENSES_COLLECTION: &str = "expenses";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_connection_string")]
    InvalidConnectionString,
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.index_error")]
    IndexError,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    /// Used when the connection string does not name a database.
    pub database_name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            database_name: database_name.into(),
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(10),
        }
    }
}

/// Connects to MongoDB, verifies the server answers a ping and ensures indexes.
///
/// Called once at startup. The returned handle is internally pooled and cheap
/// to clone into every repository.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(config.connection_string.as_str())
        .await
        .map_err(|e| {
            error!(error = %e, "Invalid MongoDB connection string");
            DatabaseError::InvalidConnectionString
        })?;

    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let database_name = options
        .default_database
        .clone()
        .unwrap_or_else(|| config.database_name.clone());

    let client = Client::with_options(options).map_err(|e| {
        error!(error = %e, "Failed to build MongoDB client");
        DatabaseError::ConnectionError
    })?;
    let database = client.database(&database_name);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| {
            error!(error = %e, "MongoDB did not answer ping");
            DatabaseError::ConnectionError
        })?;

    info!(database = %database_name, "Connected to MongoDB");

    ensure_indexes(&database).await?;
    Ok(database)
}

/// Creates the unique email index and the per-owner lookup indexes.
pub async fn ensure_indexes(database: &Database) -> Result<(), DatabaseError> {
    let unique_email = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    database
        .collection::<Document>(USERS_COLLECTION)
        .create_index(unique_email)
        .await
        .map_err(index_error)?;

    for collection in [INCOMES_COLLECTION, EXPENSES_COLLECTION] {
        let by_owner = IndexModel::builder()
            .keys(doc! { "user_id": 1, "date": -1 })
            .build();
        database
            .collection::<Document>(collection)
            .create_index(by_owner)
            .await
            .map_err(index_error)?;
    }

    Ok(())
}

fn index_error(err: mongodb::error::Error) -> DatabaseError {
    error!(error = %err, "Failed to create MongoDB index");
    DatabaseError::IndexError
}

/// Logs the driver error server-side and hides it behind a stable code.
pub(crate) fn database_error(err: mongodb::error::Error) -> RepositoryError {
    error!(error = %err, "MongoDB operation failed");
    RepositoryError::DatabaseError
}

pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub(crate) fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
