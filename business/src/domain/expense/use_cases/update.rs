use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::{Expense, ExpenseChanges};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateExpenseParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub changes: ExpenseChanges,
}

#[async_trait]
pub trait UpdateExpenseUseCase: Send + Sync {
    async fn execute(&self, params: UpdateExpenseParams) -> Result<Expense, ExpenseError>;
}
