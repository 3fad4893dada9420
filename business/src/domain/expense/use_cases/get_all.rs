use async_trait::async_trait;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::Expense;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllExpensesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllExpensesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllExpensesParams) -> Result<Vec<Expense>, ExpenseError>;
}
