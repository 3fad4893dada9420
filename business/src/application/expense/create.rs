use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::model::{Expense, NewExpenseProps};
use crate::domain::expense::repository::ExpenseRepository;
use crate::domain::expense::use_cases::create::{CreateExpenseParams, CreateExpenseUseCase};
use crate::domain::logger::Logger;

pub struct CreateExpenseUseCaseImpl {
    pub repository: Arc<dyn ExpenseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateExpenseUseCase for CreateExpenseUseCaseImpl {
    async fn execute(&self, params: CreateExpenseParams) -> Result<Expense, ExpenseError> {
        self.logger
            .info(&format!("Creating expense for user: {}", params.user_id));

        let expense = Expense::new(NewExpenseProps {
            user_id: params.user_id,
            title: params.title,
            amount: params.amount,
            category: params.category,
            description: params.description,
            date: params.date,
        })?;
        self.repository.create(&expense).await?;

        self.logger.info(&format!("Expense created: {}", expense.id));
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockExpenseRepo, mock_logger, test_user_id};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;

    fn params(title: &str, amount: f64) -> CreateExpenseParams {
        CreateExpenseParams {
            user_id: test_user_id(),
            title: title.to_string(),
            amount,
            category: "Food".to_string(),
            description: Some("Weekly shop".to_string()),
            date: None,
        }
    }

    #[tokio::test]
    async fn should_create_expense_owned_by_caller() {
        let mut mock_repo = MockExpenseRepo::new();
        mock_repo
            .expect_create()
            .withf(|expense| expense.user_id == UserId::new("test-user-id"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateExpenseUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let expense = use_case.execute(params("Groceries", 82.5)).await.unwrap();

        assert_eq!(expense.title, "Groceries");
        assert_eq!(expense.description.as_deref(), Some("Weekly shop"));
    }

    #[tokio::test]
    async fn should_reject_invalid_amount_without_saving() {
        let mut mock_repo = MockExpenseRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateExpenseUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Groceries", 0.0)).await;

        assert!(matches!(result.unwrap_err(), ExpenseError::AmountInvalid));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockExpenseRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateExpenseUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Groceries", 82.5)).await;

        assert!(matches!(
            result.unwrap_err(),
            ExpenseError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
