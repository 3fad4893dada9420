use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::{Income, IncomeChanges};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateIncomeParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub changes: IncomeChanges,
}

#[async_trait]
pub trait UpdateIncomeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateIncomeParams) -> Result<Income, IncomeError>;
}
