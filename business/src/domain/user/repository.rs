use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Inserts a new user. Fails with `Duplicated` when the email is already registered.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
}
