use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::shared::value_objects::UserId;

pub struct CreateIncomeParams {
    pub user_id: UserId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CreateIncomeUseCase: Send + Sync {
    async fn execute(&self, params: CreateIncomeParams) -> Result<Income, IncomeError>;
}
