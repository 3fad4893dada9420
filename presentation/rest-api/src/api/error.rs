use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

#[derive(Object, Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_id(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }

    /// Plain response for failures raised outside of typed OpenAPI handlers.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        poem::web::Json(self).with_status(status).into_response()
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
