//! Mocks and fixtures shared by the income and expense use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::expense::model::Expense;
use crate::domain::expense::repository::ExpenseRepository;
use crate::domain::income::model::Income;
use crate::domain::income::repository::IncomeRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub IncomeRepo {}

    #[async_trait]
    impl IncomeRepository for IncomeRepo {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<Income>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Income, RepositoryError>;
        async fn create(&self, income: &Income) -> Result<(), RepositoryError>;
        async fn update(&self, income: &Income) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ExpenseRepo {}

    #[async_trait]
    impl ExpenseRepository for ExpenseRepo {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<Expense>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Expense, RepositoryError>;
        async fn create(&self, expense: &Expense) -> Result<(), RepositoryError>;
        async fn update(&self, expense: &Expense) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-id")
}

pub fn stored_income(id: Uuid, user_id: UserId) -> Income {
    let now = chrono::Utc::now();
    Income::from_repository(
        id,
        user_id,
        "Salary".to_string(),
        2500.0,
        "Job".to_string(),
        None,
        now,
        now,
        now,
    )
}

pub fn stored_expense(id: Uuid, user_id: UserId) -> Expense {
    let now = chrono::Utc::now();
    Expense::from_repository(
        id,
        user_id,
        "Groceries".to_string(),
        82.5,
        "Food".to_string(),
        None,
        now,
        now,
        now,
    )
}
