use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::income::errors::IncomeError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteIncomeParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteIncomeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteIncomeParams) -> Result<(), IncomeError>;
}
