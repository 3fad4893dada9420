use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::income::errors::IncomeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for IncomeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            IncomeError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "income.title_empty",
            ),
            IncomeError::AmountInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "income.amount_invalid",
            ),
            IncomeError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "income.category_empty",
            ),
            IncomeError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "income.not_found"),
            IncomeError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
