use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::expense::model::{Expense, ExpenseChanges};

/// The owner is always the authenticated caller; no user id is accepted here.
#[derive(Debug, Clone, Object)]
pub struct CreateExpenseRequest {
    /// Short label (cannot be empty)
    pub title: String,
    /// Positive amount
    pub amount: f64,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// When the expense was paid; defaults to now
    #[oai(skip_serializing_if_is_none)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateExpenseRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// An empty string clears the description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub date: Option<DateTime<Utc>>,
}

impl From<UpdateExpenseRequest> for ExpenseChanges {
    fn from(request: UpdateExpenseRequest) -> Self {
        Self {
            title: request.title,
            amount: request.amount,
            category: request.category,
            description: request.description,
            date: request.date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpenseResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            user_id: expense.user_id.to_string(),
            title: expense.title,
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            date: expense.date,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}
