use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Expense;

/// Every operation is scoped to the owning user; another user's record is `NotFound`.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Expense>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Expense, RepositoryError>;
    async fn create(&self, expense: &Expense) -> Result<(), RepositoryError>;
    /// Replaces an existing record. `NotFound` when it no longer exists for its owner.
    async fn update(&self, expense: &Expense) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
