use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::{Income, NewIncomeProps};
use crate::domain::income::repository::IncomeRepository;
use crate::domain::income::use_cases::create::{CreateIncomeParams, CreateIncomeUseCase};
use crate::domain::logger::Logger;

pub struct CreateIncomeUseCaseImpl {
    pub repository: Arc<dyn IncomeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIncomeUseCase for CreateIncomeUseCaseImpl {
    async fn execute(&self, params: CreateIncomeParams) -> Result<Income, IncomeError> {
        self.logger
            .info(&format!("Creating income for user: {}", params.user_id));

        let income = Income::new(NewIncomeProps {
            user_id: params.user_id,
            title: params.title,
            amount: params.amount,
            category: params.category,
            description: params.description,
            date: params.date,
        })?;
        self.repository.create(&income).await?;

        self.logger.info(&format!("Income created: {}", income.id));
        Ok(income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockIncomeRepo, mock_logger, test_user_id};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;

    fn params(title: &str, amount: f64) -> CreateIncomeParams {
        CreateIncomeParams {
            user_id: test_user_id(),
            title: title.to_string(),
            amount,
            category: "Job".to_string(),
            description: Some("March payroll".to_string()),
            date: None,
        }
    }

    #[tokio::test]
    async fn should_create_income_owned_by_caller() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_create()
            .withf(|income| income.user_id == UserId::new("test-user-id"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let income = use_case.execute(params("Salary", 2500.0)).await.unwrap();

        assert_eq!(income.title, "Salary");
        assert_eq!(income.description.as_deref(), Some("March payroll"));
    }

    #[tokio::test]
    async fn should_reject_invalid_amount_without_saving() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Salary", 0.0)).await;

        assert!(matches!(result.unwrap_err(), IncomeError::AmountInvalid));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Salary", 2500.0)).await;

        assert!(matches!(
            result.unwrap_err(),
            IncomeError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
