use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::income::use_cases::create::{CreateIncomeParams, CreateIncomeUseCase};
use business::domain::income::use_cases::delete::{DeleteIncomeParams, DeleteIncomeUseCase};
use business::domain::income::use_cases::get_all::{GetAllIncomesParams, GetAllIncomesUseCase};
use business::domain::income::use_cases::get_by_id::{
    GetIncomeByIdParams, GetIncomeByIdUseCase,
};
use business::domain::income::use_cases::update::{UpdateIncomeParams, UpdateIncomeUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::income::dto::{CreateIncomeRequest, IncomeResponse, UpdateIncomeRequest};
use crate::api::security::CookieAuth;
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "income.invalid_id";

pub struct IncomeApi {
    create_use_case: Arc<dyn CreateIncomeUseCase>,
    get_all_use_case: Arc<dyn GetAllIncomesUseCase>,
    get_by_id_use_case: Arc<dyn GetIncomeByIdUseCase>,
    update_use_case: Arc<dyn UpdateIncomeUseCase>,
    delete_use_case: Arc<dyn DeleteIncomeUseCase>,
}

impl IncomeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateIncomeUseCase>,
        get_all_use_case: Arc<dyn GetAllIncomesUseCase>,
        get_by_id_use_case: Arc<dyn GetIncomeByIdUseCase>,
        update_use_case: Arc<dyn UpdateIncomeUseCase>,
        delete_use_case: Arc<dyn DeleteIncomeUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Income tracking API
///
/// Every endpoint requires the auth cookie and only sees the caller's records.
#[OpenApi]
impl IncomeApi {
    /// List incomes
    ///
    /// Returns the caller's incomes, newest first.
    #[oai(path = "/api/v1/incomes", method = "get", tag = "ApiTags::Incomes")]
    async fn get_all(&self, auth: CookieAuth) -> GetAllIncomesResponse {
        let params = GetAllIncomesParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(incomes) => {
                let responses: Vec<IncomeResponse> =
                    incomes.into_iter().map(|i| i.into()).collect();
                GetAllIncomesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllIncomesResponse::InternalError(json)
            }
        }
    }

    /// Create an income
    #[oai(path = "/api/v1/incomes", method = "post", tag = "ApiTags::Incomes")]
    async fn create(&self, auth: CookieAuth, body: Json<CreateIncomeRequest>) -> CreateIncomeResponse {
        let params = CreateIncomeParams {
            user_id: auth.0.user_id,
            title: body.0.title,
            amount: body.0.amount,
            category: body.0.category,
            description: body.0.description,
            date: body.0.date,
        };

        match self.create_use_case.execute(params).await {
            Ok(income) => CreateIncomeResponse::Created(Json(income.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateIncomeResponse::BadRequest(json),
                    _ => CreateIncomeResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an income by ID
    #[oai(path = "/api/v1/incomes/:id", method = "get", tag = "ApiTags::Incomes")]
    async fn get_by_id(&self, auth: CookieAuth, id: Path<String>) -> GetIncomeByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetIncomeByIdResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = GetIncomeByIdParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(income) => GetIncomeByIdResponse::Ok(Json(income.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetIncomeByIdResponse::NotFound(json),
                    _ => GetIncomeByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an income
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/api/v1/incomes/:id", method = "put", tag = "ApiTags::Incomes")]
    async fn update(
        &self,
        auth: CookieAuth,
        id: Path<String>,
        body: Json<UpdateIncomeRequest>,
    ) -> UpdateIncomeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateIncomeResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = UpdateIncomeParams {
            id,
            user_id: auth.0.user_id,
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(income) => UpdateIncomeResponse::Ok(Json(income.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateIncomeResponse::BadRequest(json),
                    404 => UpdateIncomeResponse::NotFound(json),
                    _ => UpdateIncomeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an income
    #[oai(path = "/api/v1/incomes/:id", method = "delete", tag = "ApiTags::Incomes")]
    async fn delete(&self, auth: CookieAuth, id: Path<String>) -> DeleteIncomeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteIncomeResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = DeleteIncomeParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteIncomeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteIncomeResponse::NotFound(json),
                    _ => DeleteIncomeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllIncomesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IncomeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateIncomeResponse {
    #[oai(status = 201)]
    Created(Json<IncomeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIncomeByIdResponse {
    #[oai(status = 200)]
    Ok(Json<IncomeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateIncomeResponse {
    #[oai(status = 200)]
    Ok(Json<IncomeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteIncomeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
