use poem::middleware::Cors;

use super::Lookup;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

pub const ALLOWED_METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];
pub const ALLOWED_HEADERS: [&str; 2] = ["content-type", "authorization"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin is accepted and echoed back with credentials allowed.
    Any,
    List(Vec<String>),
}

/// The allow-set checked against every request's `Origin` header.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

impl CorsConfig {
    /// Environment variables:
    /// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins, `*` for any
    ///   (default: "http://localhost:5173,http://localhost:3000")
    pub fn from_lookup(lookup: Lookup) -> Self {
        let raw = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let allowed_origins = if origins.iter().any(|origin| origin == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        };

        Self { allowed_origins }
    }

    pub fn allows(&self, origin: &str) -> bool {
        match &self.allowed_origins {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(origins) => origins.iter().any(|allowed| allowed == origin),
        }
    }

    /// CORS response headers for origins that passed the origin guard.
    ///
    /// Configuration:
    /// - Methods: GET, POST, PUT, DELETE
    /// - Headers: content-type, authorization
    /// - Credentials: Enabled
    pub fn init_cors(&self) -> Cors {
        let cors = Cors::new()
            .allow_methods(ALLOWED_METHODS.to_vec())
            .allow_headers(ALLOWED_HEADERS.to_vec())
            .allow_credentials(true);

        match &self.allowed_origins {
            AllowedOrigins::Any => cors,
            AllowedOrigins::List(origins) => {
                cors.allow_origins(origins.iter().map(String::as_str).collect::<Vec<_>>())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_only_listed_origins() {
        let config = CorsConfig::parse("http://good.example, https://app.example/");

        assert!(config.allows("http://good.example"));
        assert!(config.allows("https://app.example"));
        assert!(!config.allows("http://evil.example"));
    }

    #[test]
    fn should_treat_star_as_any_origin() {
        let config = CorsConfig::parse("*");

        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
        assert!(config.allows("http://anything.example"));
    }

    #[test]
    fn should_reject_everything_when_list_is_empty() {
        let config = CorsConfig::parse(" , ");

        assert!(!config.allows("http://localhost:5173"));
    }

    #[test]
    fn should_default_to_local_development_origins() {
        let config = CorsConfig::from_lookup(&|_| None);

        assert!(config.allows("http://localhost:5173"));
        assert!(!config.allows("http://evil.example"));
    }
}
