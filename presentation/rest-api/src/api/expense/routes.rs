use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::expense::use_cases::create::{CreateExpenseParams, CreateExpenseUseCase};
use business::domain::expense::use_cases::delete::{DeleteExpenseParams, DeleteExpenseUseCase};
use business::domain::expense::use_cases::get_all::{GetAllExpensesParams, GetAllExpensesUseCase};
use business::domain::expense::use_cases::get_by_id::{
    GetExpenseByIdParams, GetExpenseByIdUseCase,
};
use business::domain::expense::use_cases::update::{UpdateExpenseParams, UpdateExpenseUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::expense::dto::{CreateExpenseRequest, ExpenseResponse, UpdateExpenseRequest};
use crate::api::security::CookieAuth;
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "expense.invalid_id";

pub struct ExpenseApi {
    create_use_case: Arc<dyn CreateExpenseUseCase>,
    get_all_use_case: Arc<dyn GetAllExpensesUseCase>,
    get_by_id_use_case: Arc<dyn GetExpenseByIdUseCase>,
    update_use_case: Arc<dyn UpdateExpenseUseCase>,
    delete_use_case: Arc<dyn DeleteExpenseUseCase>,
}

impl ExpenseApi {
    pub fn new(
        create_use_case: Arc<dyn CreateExpenseUseCase>,
        get_all_use_case: Arc<dyn GetAllExpensesUseCase>,
        get_by_id_use_case: Arc<dyn GetExpenseByIdUseCase>,
        update_use_case: Arc<dyn UpdateExpenseUseCase>,
        delete_use_case: Arc<dyn DeleteExpenseUseCase>,
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

/// Expense tracking API
///
/// Every endpoint requires the auth cookie and only sees the caller's records.
#[OpenApi]
impl ExpenseApi {
    /// List expenses
    ///
    /// Returns the caller's expenses, newest first.
    #[oai(path = "/api/v1/expenses", method = "get", tag = "ApiTags::Expenses")]
    async fn get_all(&self, auth: CookieAuth) -> GetAllExpensesResponse {
        let params = GetAllExpensesParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(expenses) => {
                let responses: Vec<ExpenseResponse> =
                    expenses.into_iter().map(|i| i.into()).collect();
                GetAllExpensesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllExpensesResponse::InternalError(json)
            }
        }
    }

    /// Create an expense
    #[oai(path = "/api/v1/expenses", method = "post", tag = "ApiTags::Expenses")]
    async fn create(&self, auth: CookieAuth, body: Json<CreateExpenseRequest>) -> CreateExpenseResponse {
        let params = CreateExpenseParams {
            user_id: auth.0.user_id,
            title: body.0.title,
            amount: body.0.amount,
            category: body.0.category,
            description: body.0.description,
            date: body.0.date,
        };

        match self.create_use_case.execute(params).await {
            Ok(expense) => CreateExpenseResponse::Created(Json(expense.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateExpenseResponse::BadRequest(json),
                    _ => CreateExpenseResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an expense by ID
    #[oai(path = "/api/v1/expenses/:id", method = "get", tag = "ApiTags::Expenses")]
    async fn get_by_id(&self, auth: CookieAuth, id: Path<String>) -> GetExpenseByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetExpenseByIdResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = GetExpenseByIdParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(expense) => GetExpenseByIdResponse::Ok(Json(expense.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetExpenseByIdResponse::NotFound(json),
                    _ => GetExpenseByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an expense
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/api/v1/expenses/:id", method = "put", tag = "ApiTags::Expenses")]
    async fn update(
        &self,
        auth: CookieAuth,
        id: Path<String>,
        body: Json<UpdateExpenseRequest>,
    ) -> UpdateExpenseResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateExpenseResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = UpdateExpenseParams {
            id,
            user_id: auth.0.user_id,
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(expense) => UpdateExpenseResponse::Ok(Json(expense.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateExpenseResponse::BadRequest(json),
                    404 => UpdateExpenseResponse::NotFound(json),
                    _ => UpdateExpenseResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an expense
    #[oai(path = "/api/v1/expenses/:id", method = "delete", tag = "ApiTags::Expenses")]
    async fn delete(&self, auth: CookieAuth, id: Path<String>) -> DeleteExpenseResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteExpenseResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = DeleteExpenseParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteExpenseResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteExpenseResponse::NotFound(json),
                    _ => DeleteExpenseResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllExpensesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ExpenseResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateExpenseResponse {
    #[oai(status = 201)]
    Created(Json<ExpenseResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetExpenseByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ExpenseResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateExpenseResponse {
    #[oai(status = 200)]
    Ok(Json<ExpenseResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteExpenseResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
