use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.name_empty",
            ),
            UserError::EmailInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.email_invalid",
            ),
            UserError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_too_short",
            ),
            UserError::EmailTaken => (StatusCode::CONFLICT, "Conflict", "user.email_taken"),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::PasswordHash(_) | UserError::Token(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.internal",
            ),
            UserError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
