use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::shared::value_objects::UserId;

pub struct GetIncomeByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetIncomeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetIncomeByIdParams) -> Result<Income, IncomeError>;
}
