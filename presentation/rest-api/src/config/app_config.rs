use persistence::db::DatabaseConfig;

use super::auth_config::AuthConfig;
use super::cors_config::CorsConfig;
use super::server_config::ServerConfig;
use super::{ConfigError, Lookup, database_config, env_lookup};

/// Immutable configuration snapshot, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup),
            database: database_config::from_lookup(lookup)?,
            auth: AuthConfig::from_lookup(lookup)?,
        })
    }
}
