use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::income::errors::IncomeError;
use crate::domain::income::repository::IncomeRepository;
use crate::domain::income::use_cases::delete::{DeleteIncomeParams, DeleteIncomeUseCase};
use crate::domain::logger::Logger;

pub struct DeleteIncomeUseCaseImpl {
    pub repository: Arc<dyn IncomeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteIncomeUseCase for DeleteIncomeUseCaseImpl {
    async fn execute(&self, params: DeleteIncomeParams) -> Result<(), IncomeError> {
        self.logger.info(&format!("Deleting income: {}", params.id));

        // Verify it exists for this user
        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IncomeError::NotFound,
                other => IncomeError::Repository(other),
            })?;

        self.repository.delete(params.id, &params.user_id).await?;

        self.logger.info(&format!("Income deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockIncomeRepo, mock_logger, stored_income, test_user_id,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_existing_income() {
        let income_id = Uuid::new_v4();
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id, user_id| Ok(stored_income(id, user_id.clone())));
        mock_repo
            .expect_delete()
            .withf(move |id, user_id| *id == income_id && user_id.as_str() == "test-user-id")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = DeleteIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteIncomeParams {
                id: income_id,
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteIncomeParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), IncomeError::NotFound));
    }
}
