use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::Expense;
use crate::domain::expense::repository::ExpenseRepository;
use crate::domain::expense::use_cases::get_all::{GetAllExpensesParams, GetAllExpensesUseCase};
use crate::domain::logger::Logger;

pub struct GetAllExpensesUseCaseImpl {
    pub repository: Arc<dyn ExpenseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllExpensesUseCase for GetAllExpensesUseCaseImpl {
    async fn execute(&self, params: GetAllExpensesParams) -> Result<Vec<Expense>, ExpenseError> {
        self.logger.info("Getting all expenses");
        let expenses = self.repository.get_all(&params.user_id).await?;
        self.logger
            .info(&format!("Retrieved {} expenses", expenses.len()));
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockExpenseRepo, mock_logger, stored_expense, test_user_id,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_only_callers_expenses() {
        let mut mock_repo = MockExpenseRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|user_id| user_id.as_str() == "test-user-id")
            .returning(|user_id| {
                Ok(vec![
                    stored_expense(Uuid::new_v4(), user_id.clone()),
                    stored_expense(Uuid::new_v4(), user_id.clone()),
                ])
            });

        let use_case = GetAllExpensesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllExpensesParams {
                user_id: test_user_id(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_when_no_expenses() {
        let mut mock_repo = MockExpenseRepo::new();
        mock_repo.expect_get_all().returning(|_| Ok(vec![]));

        let use_case = GetAllExpensesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllExpensesParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
