use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::Expense;
use crate::domain::expense::repository::ExpenseRepository;
use crate::domain::expense::use_cases::get_by_id::{GetExpenseByIdParams, GetExpenseByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetExpenseByIdUseCaseImpl {
    pub repository: Arc<dyn ExpenseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpenseByIdUseCase for GetExpenseByIdUseCaseImpl {
    async fn execute(&self, params: GetExpenseByIdParams) -> Result<Expense, ExpenseError> {
        self.logger.debug(&format!("Getting expense: {}", params.id));

        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ExpenseError::NotFound,
                other => ExpenseError::Repository(other),
            })
    }
}
