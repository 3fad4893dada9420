use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::IncomeError;
use crate::domain::shared::value_objects::{Amount, UserId, non_blank};

#[derive(Debug, Clone)]
pub struct Income {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewIncomeProps {
    pub user_id: UserId,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    /// Defaults to the creation time.
    pub date: Option<DateTime<Utc>>,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct IncomeChanges {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl Income {
    pub fn new(props: NewIncomeProps) -> Result<Self, IncomeError> {
        let title = non_blank(&props.title).ok_or(IncomeError::TitleEmpty)?;
        let amount = Amount::new(props.amount).ok_or(IncomeError::AmountInvalid)?;
        let category = non_blank(&props.category).ok_or(IncomeError::CategoryEmpty)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            title,
            amount: amount.value(),
            category,
            description: props.description.as_deref().and_then(non_blank),
            date: props.date.unwrap_or(now),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        title: String,
        amount: f64,
        category: String,
        description: Option<String>,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            amount,
            category,
            description,
            date,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial update with the same validation rules as creation.
    /// An empty description clears it.
    pub fn apply(self, changes: IncomeChanges) -> Result<Self, IncomeError> {
        let title = match changes.title {
            Some(title) => non_blank(&title).ok_or(IncomeError::TitleEmpty)?,
            None => self.title,
        };
        let amount = match changes.amount {
            Some(amount) => Amount::new(amount)
                .ok_or(IncomeError::AmountInvalid)?
                .value(),
            None => self.amount,
        };
        let category = match changes.category {
            Some(category) => non_blank(&category).ok_or(IncomeError::CategoryEmpty)?,
            None => self.category,
        };
        let description = match changes.description {
            Some(description) => non_blank(&description),
            None => self.description,
        };

        Ok(Self {
            title,
            amount,
            category,
            description,
            date: changes.date.unwrap_or(self.date),
            updated_at: Utc::now(),
            ..self
        })
    }
}
