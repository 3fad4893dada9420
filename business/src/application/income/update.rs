use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::income::repository::IncomeRepository;
use crate::domain::income::use_cases::update::{UpdateIncomeParams, UpdateIncomeUseCase};
use crate::domain::logger::Logger;

pub struct UpdateIncomeUseCaseImpl {
    pub repository: Arc<dyn IncomeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateIncomeUseCase for UpdateIncomeUseCaseImpl {
    async fn execute(&self, params: UpdateIncomeParams) -> Result<Income, IncomeError> {
        self.logger.info(&format!("Updating income: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IncomeError::NotFound,
                other => IncomeError::Repository(other),
            })?;

        let updated = existing.apply(params.changes)?;
        self.repository.update(&updated).await.map_err(|e| match e {
            RepositoryError::NotFound => IncomeError::NotFound,
            other => IncomeError::Repository(other),
        })?;

        self.logger.info(&format!("Income updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockIncomeRepo, mock_logger, stored_income, test_user_id,
    };
    use crate::domain::income::model::IncomeChanges;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_update_only_provided_fields() {
        let income_id = Uuid::new_v4();
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id, user_id| Ok(stored_income(id, user_id.clone())));
        mock_repo
            .expect_update()
            .withf(|income| income.title == "Bonus" && income.amount == 2500.0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateIncomeParams {
                id: income_id,
                user_id: test_user_id(),
                changes: IncomeChanges {
                    title: Some("Bonus".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.id, income_id);
        assert_eq!(updated.category, "Job");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateIncomeParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
                changes: IncomeChanges::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), IncomeError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_blank_title() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id, user_id| Ok(stored_income(id, user_id.clone())));
        mock_repo.expect_update().never();

        let use_case = UpdateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateIncomeParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
                changes: IncomeChanges {
                    title: Some(" ".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), IncomeError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_record_deleted_before_update_lands() {
        let mut mock_repo = MockIncomeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id, user_id| Ok(stored_income(id, user_id.clone())));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateIncomeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateIncomeParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
                changes: IncomeChanges {
                    amount: Some(10.0),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), IncomeError::NotFound));
    }
}
