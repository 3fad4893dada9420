use std::sync::Arc;

use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use business::domain::shared::value_objects::UserId;
use business::domain::user::services::{TokenError, TokenService};

/// The authenticated caller, resolved from the auth cookie for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("auth.missing_token")]
    MissingToken,
    #[error("auth.invalid_token: {0}")]
    InvalidToken(#[from] TokenError),
}

/// Verifies auth tokens. Shared with handlers as request data.
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<dyn TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    pub fn authenticate(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;
        let user_id = self.tokens.verify(token)?;
        Ok(Identity { user_id })
    }
}

/// Cookie authentication: the `token` cookie must hold a valid, unexpired token.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "token",
    key_in = "cookie",
    checker = "auth_cookie_checker"
)]
pub struct CookieAuth(pub Identity);

async fn auth_cookie_checker(req: &Request, api_key: ApiKey) -> Option<Identity> {
    let Some(gate) = req.data::<AuthGate>() else {
        tracing::error!("auth gate missing from request data");
        return None;
    };

    match gate.authenticate(Some(&api_key.key)) {
        Ok(identity) => Some(identity),
        Err(err) => {
            tracing::debug!(error = %err, "rejected auth cookie");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use auth::JwtTokenService;

    use super::*;

    fn gate() -> (AuthGate, Arc<JwtTokenService>) {
        let tokens = Arc::new(JwtTokenService::new("test-secret", Duration::from_secs(60)));
        (AuthGate::new(tokens.clone()), tokens)
    }

    #[test]
    fn should_resolve_identity_from_minted_token() {
        let (gate, tokens) = gate();
        let token = tokens.issue(&UserId::new("user-42")).unwrap();

        let identity = gate.authenticate(Some(&token)).unwrap();

        assert_eq!(identity.user_id, UserId::new("user-42"));
    }

    #[test]
    fn should_reject_missing_token() {
        let (gate, _) = gate();

        assert_eq!(gate.authenticate(None), Err(AuthError::MissingToken));
        assert_eq!(gate.authenticate(Some("")), Err(AuthError::MissingToken));
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let (gate, _) = gate();
        let foreign = JwtTokenService::new("other-secret", Duration::from_secs(60))
            .issue(&UserId::new("user-42"))
            .unwrap();

        let result = gate.authenticate(Some(&foreign));

        assert_eq!(result, Err(AuthError::InvalidToken(TokenError::Invalid)));
    }

    #[test]
    fn should_reject_garbage_token() {
        let (gate, _) = gate();

        let result = gate.authenticate(Some("not-a-jwt"));

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
