use async_trait::async_trait;

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllIncomesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllIncomesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllIncomesParams) -> Result<Vec<Income>, IncomeError>;
}
