#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("expense.title_empty")]
    TitleEmpty,
    #[error("expense.amount_invalid")]
    AmountInvalid,
    #[error("expense.category_empty")]
    CategoryEmpty,
    #[error("expense.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
