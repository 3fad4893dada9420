use crate::domain::shared::value_objects::UserId;

#[derive(Debug, thiserror::Error)]
#[error("password.hash_failed")]
pub struct PasswordHashError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token.expired")]
    Expired,
    #[error("token.invalid")]
    Invalid,
    #[error("token.signing_failed")]
    Signing,
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
    /// Returns `Ok(false)` for a well-formed hash that does not match.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordHashError>;
}

/// Issues and verifies signed, expiring auth tokens whose subject is a [`UserId`].
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
