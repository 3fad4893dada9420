use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::income::errors::IncomeError;
use crate::domain::income::model::Income;
use crate::domain::income::repository::IncomeRepository;
use crate::domain::income::use_cases::get_all::{GetAllIncomesParams, GetAllIncomesUseCase};
use crate::domain::logger::Logger;

pub struct GetAllIncomesUseCaseImpl {
    pub repository: Arc<dyn IncomeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllIncomesUseCase for GetAllIncomesUseCaseImpl {
    async fn execute(&self, params: GetAllIncomesParams) -> Result<Vec<Income>, IncomeError> {
        self.logger.info("Getting all incomes");
        let incomes = self.repository.get_all(&params.user_id).await?;
        self.logger
            .info(&format!("Retrieved {} incomes", incomes.len()));
        Ok(incomes)
    }
}
