use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginUserParams, LoginUserUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::cookie::AuthCookie;
use crate::api::user::dto::{LoginRequest, RegisterRequest, UserResponse};

pub struct UserApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUserUseCase>,
    cookie: AuthCookie,
}

impl UserApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUserUseCase>,
        cookie: AuthCookie,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            cookie,
        }
    }
}

/// Account management API
///
/// Public endpoints; successful register and login set the `token` cookie.
#[OpenApi]
impl UserApi {
    /// Register a user
    ///
    /// Creates the account and signs the caller in.
    #[oai(path = "/api/v1/users/register", method = "post", tag = "ApiTags::Users")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterUserResponse {
        let params = RegisterUserParams {
            name: body.0.name,
            email: body.0.email,
            password: body.0.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(session) => RegisterUserResponse::Created(
                Json(session.user.into()),
                self.cookie.issue(&session.token),
            ),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterUserResponse::BadRequest(json),
                    409 => RegisterUserResponse::Conflict(json),
                    _ => RegisterUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Unknown email and wrong password answer the same 401.
    #[oai(path = "/api/v1/users/login", method = "post", tag = "ApiTags::Users")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginUserResponse {
        let params = LoginUserParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => {
                LoginUserResponse::Ok(Json(session.user.into()), self.cookie.issue(&session.token))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginUserResponse::BadRequest(json),
                    401 => LoginUserResponse::Unauthorized(json),
                    _ => LoginUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Log out
    #[oai(path = "/api/v1/users/logout", method = "post", tag = "ApiTags::Users")]
    async fn logout(&self) -> LogoutUserResponse {
        LogoutUserResponse::NoContent(self.cookie.expire())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>, #[oai(header = "Set-Cookie")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>, #[oai(header = "Set-Cookie")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutUserResponse {
    #[oai(status = 204)]
    NoContent(#[oai(header = "Set-Cookie")] String),
}
