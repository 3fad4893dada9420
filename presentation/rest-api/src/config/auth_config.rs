use std::fmt;
use std::time::Duration;

use super::{ConfigError, Lookup, parsed_or, required};

/// Name of the cookie carrying the auth token.
pub const AUTH_COOKIE_NAME: &str = "token";

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Lifetime of both the token and the cookie holding it.
    pub token_ttl: Duration,
    /// Marks the cookie `Secure; SameSite=None` for cross-site HTTPS frontends.
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: Token signing secret (required)
    /// - JWT_EXPIRES_IN_SECS: Token lifetime (default: 604800, seven days)
    /// - COOKIE_SECURE: "true" behind HTTPS (default: false)
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let jwt_secret = required(lookup, "JWT_SECRET")?;
        let ttl_secs: u64 = parsed_or(lookup, "JWT_EXPIRES_IN_SECS", 7 * 24 * 60 * 60)?;
        let cookie_secure = parsed_or(lookup, "COOKIE_SECURE", false)?;

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
            cookie_secure,
        })
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
