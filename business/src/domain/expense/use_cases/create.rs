use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::Expense;
use crate::domain::shared::value_objects::UserId;

pub struct CreateExpenseParams {
    pub user_id: UserId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CreateExpenseUseCase: Send + Sync {
    async fn execute(&self, params: CreateExpenseParams) -> Result<Expense, ExpenseError>;
}
