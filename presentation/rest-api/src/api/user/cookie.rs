use std::time::Duration;

use poem::web::cookie::{Cookie, SameSite};

use crate::config::auth_config::{AUTH_COOKIE_NAME, AuthConfig};

/// Builds the `Set-Cookie` values carrying the auth token.
#[derive(Debug, Clone)]
pub struct AuthCookie {
    max_age: Duration,
    secure: bool,
}

impl AuthCookie {
    pub fn new(max_age: Duration, secure: bool) -> Self {
        Self { max_age, secure }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_ttl, config.cookie_secure)
    }

    pub fn issue(&self, token: &str) -> String {
        self.build(token, self.max_age)
    }

    /// An empty cookie that the browser drops immediately.
    pub fn expire(&self) -> String {
        self.build("", Duration::ZERO)
    }

    fn build(&self, value: &str, max_age: Duration) -> String {
        let mut cookie = Cookie::new_with_str(AUTH_COOKIE_NAME, value);
        cookie.set_http_only(true);
        cookie.set_path("/");
        cookie.set_max_age(max_age);
        // Cross-site frontends need SameSite=None, which browsers only accept with Secure.
        if self.secure {
            cookie.set_secure(true);
            cookie.set_same_site(SameSite::None);
        } else {
            cookie.set_same_site(SameSite::Lax);
        }
        cookie.to_string()
    }
}
