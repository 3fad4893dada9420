use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::Expense;
use crate::domain::shared::value_objects::UserId;

pub struct GetExpenseByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetExpenseByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetExpenseByIdParams) -> Result<Expense, ExpenseError>;
}
