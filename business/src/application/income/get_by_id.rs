use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::income::repository::IncomeRepository;
use crate::domain::income::use_cases::get_by_id::{GetIncomeByIdParams, GetIncomeByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetIncomeByIdUseCaseImpl {
    pub repository: Arc<dyn IncomeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIncomeByIdUseCase for GetIncomeByIdUseCaseImpl {
    async fn execute(&self, params: GetIncomeByIdParams) -> Result<Income, IncomeError> {
        self.logger.debug(&format!("Getting income: {}", params.id));

        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IncomeError::NotFound,
                other => IncomeError::Repository(other),
            })
    }
}
