use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ExpenseError;
use crate::domain::shared::value_objects::{Amount, UserId, non_blank};

#[derive(Debug, Clone)]
pub struct Expense {
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

pub struct NewExpenseProps {
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
pub struct ExpenseChanges {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn new(props: NewExpenseProps) -> Result<Self, ExpenseError> {
        let title = non_blank(&props.title).ok_or(ExpenseError::TitleEmpty)?;
        let amount = Amount::new(props.amount).ok_or(ExpenseError::AmountInvalid)?;
        let category = non_blank(&props.category).ok_or(ExpenseError::CategoryEmpty)?;

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
    pub fn apply(self, changes: ExpenseChanges) -> Result<Self, ExpenseError> {
        let title = match changes.title {
            Some(title) => non_blank(&title).ok_or(ExpenseError::TitleEmpty)?,
            None => self.title,
        };
        let amount = match changes.amount {
            Some(amount) => Amount::new(amount)
                .ok_or(ExpenseError::AmountInvalid)?
                .value(),
            None => self.amount,
        };
        let category = match changes.category {
            Some(category) => non_blank(&category).ok_or(ExpenseError::CategoryEmpty)?,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewExpenseProps {
        NewExpenseProps {
            user_id: UserId::new("user-1"),
            title: "Groceries".to_string(),
            amount: 82.5,
            category: "Food".to_string(),
            description: None,
            date: None,
        }
    }

    #[test]
    fn should_create_expense_when_props_valid() {
        let expense = Expense::new(props()).unwrap();

        assert_eq!(expense.title, "Groceries");
        assert_eq!(expense.amount, 82.5);
        assert_eq!(expense.user_id, UserId::new("user-1"));
        assert_eq!(expense.date, expense.created_at);
    }

    #[test]
    fn should_reject_when_title_only_whitespace() {
        let result = Expense::new(NewExpenseProps {
            title: "   ".to_string(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ExpenseError::TitleEmpty));
    }

    #[test]
    fn should_reject_when_amount_not_positive() {
        let result = Expense::new(NewExpenseProps {
            amount: -10.0,
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ExpenseError::AmountInvalid));
    }

    #[test]
    fn should_reject_when_category_empty() {
        let result = Expense::new(NewExpenseProps {
            category: String::new(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ExpenseError::CategoryEmpty));
    }

    #[test]
    fn should_drop_blank_description() {
        let expense = Expense::new(NewExpenseProps {
            description: Some("  ".to_string()),
            ..props()
        })
        .unwrap();

        assert!(expense.description.is_none());
    }

    #[test]
    fn should_keep_untouched_fields_on_partial_update() {
        let expense = Expense::new(props()).unwrap();
        let id = expense.id;

        let updated = expense
            .apply(ExpenseChanges {
                amount: Some(90.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.amount, 90.0);
    }

    #[test]
    fn should_reject_partial_update_with_zero_amount() {
        let expense = Expense::new(props()).unwrap();

        let result = expense.apply(ExpenseChanges {
            amount: Some(0.0),
            ..Default::default()
        });

        assert!(matches!(result.unwrap_err(), ExpenseError::AmountInvalid));
    }
}
