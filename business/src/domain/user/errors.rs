use super::services::{PasswordHashError, TokenError};

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.password_hash_failed")]
    PasswordHash(#[from] PasswordHashError),
    #[error("user.token_issue_failed")]
    Token(#[from] TokenError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
