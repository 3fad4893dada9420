use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::income::model::{Income, IncomeChanges};

/// The owner is always the authenticated caller; no user id is accepted here.
#[derive(Debug, Clone, Object)]
pub struct CreateIncomeRequest {
    /// Short label (cannot be empty)
    pub title: String,
    /// Positive amount
    pub amount: f64,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// When the income was received; defaults to now
    #[oai(skip_serializing_if_is_none)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateIncomeRequest {
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

impl From<UpdateIncomeRequest> for IncomeChanges {
    fn from(request: UpdateIncomeRequest) -> Self {
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
pub struct IncomeResponse {
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

impl From<Income> for IncomeResponse {
    fn from(income: Income) -> Self {
        Self {
            id: income.id.to_string(),
            user_id: income.user_id.to_string(),
            title: income.title,
            amount: income.amount,
            category: income.category,
            description: income.description,
            date: income.date,
            created_at: income.created_at,
            updated_at: income.updated_at,
        }
    }
}
