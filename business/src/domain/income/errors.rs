#[derive(Debug, thiserror::Error)]
pub enum IncomeError {
    #[error("income.title_empty")]
    TitleEmpty,
    #[error("income.amount_invalid")]
    AmountInvalid,
    #[error("income.category_empty")]
    CategoryEmpty,
    #[error("income.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
