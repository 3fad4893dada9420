use mongodb::Database;
use persistence::db::{DatabaseConfig, DatabaseError, connect};

use super::{ConfigError, Lookup, parsed_or, required};

/// Reads the database configuration.
///
/// Environment variables:
/// - DATABASE_URL: MongoDB connection string (required)
/// - DATABASE_NAME: Database used when the URL names none (default: "budget_tracker")
/// - DATABASE_MAX_POOL_SIZE: Driver pool size (default: 10)
pub fn from_lookup(lookup: Lookup) -> Result<DatabaseConfig, ConfigError> {
    let url = required(lookup, "DATABASE_URL")?;
    let name = lookup("DATABASE_NAME").unwrap_or_else(|| "budget_tracker".to_string());

    let mut config = DatabaseConfig::new(url, name);
    config.max_pool_size = parsed_or(lookup, "DATABASE_MAX_POOL_SIZE", config.max_pool_size)?;
    Ok(config)
}

/// Connects once; the returned handle is shared by every repository.
///
/// # Errors
/// Returns error if the connection string is invalid or the server is unreachable
pub async fn init_database(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    connect(config).await
}
