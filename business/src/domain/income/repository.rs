use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Income;

/// Every operation is scoped to the owning user; another user's record is `NotFound`.
#[async_trait]
pub trait IncomeRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Income>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Income, RepositoryError>;
    async fn create(&self, income: &Income) -> Result<(), RepositoryError>;
    /// Replaces an existing record. `NotFound` when it no longer exists for its owner.
    async fn update(&self, income: &Income) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
