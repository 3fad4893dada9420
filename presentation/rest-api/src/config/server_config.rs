use std::time::Duration;

use super::{ConfigError, Lookup, parsed_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Deadline applied to every request.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - PORT: Port to bind (default: 3000)
    /// - REQUEST_TIMEOUT_SECS: Per-request deadline (default: 30)
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parsed_or(lookup, "PORT", 3000)?;
        let timeout_secs: u64 = parsed_or(lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            ip,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
