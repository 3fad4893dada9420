use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::expense::errors::ExpenseError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExpenseError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ExpenseError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "expense.title_empty",
            ),
            ExpenseError::AmountInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "expense.amount_invalid",
            ),
            ExpenseError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "expense.category_empty",
            ),
            ExpenseError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "expense.not_found"),
            ExpenseError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
