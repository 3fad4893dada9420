use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::expense::model::Expense;
use business::domain::shared::value_objects::UserId;

use crate::db::{from_bson_datetime, to_bson_datetime};

/// Document stored in the `expenses` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: bson::DateTime,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl ExpenseEntity {
    pub fn from_domain(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            user_id: expense.user_id.as_str().to_string(),
            title: expense.title.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            description: expense.description.clone(),
            date: to_bson_datetime(expense.date),
            created_at: to_bson_datetime(expense.created_at),
            updated_at: to_bson_datetime(expense.updated_at),
        }
    }

    pub fn into_domain(self) -> Result<Expense, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|_| RepositoryError::DatabaseError)?;
        Ok(Expense::from_repository(
            id,
            UserId::new(self.user_id),
            self.title,
            self.amount,
            self.category,
            self.description,
            from_bson_datetime(self.date),
            from_bson_datetime(self.created_at),
            from_bson_datetime(self.updated_at),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::expense::model::NewExpenseProps;

    #[test]
    fn should_keep_owner_and_amount_when_mapping_to_document() {
        let expense = Expense::new(NewExpenseProps {
            user_id: UserId::new("user-1"),
            title: "Groceries".to_string(),
            amount: 82.5,
            category: "Food".to_string(),
            description: None,
            date: None,
        })
        .unwrap();

        let restored = ExpenseEntity::from_domain(&expense).into_domain().unwrap();

        assert_eq!(restored.id, expense.id);
        assert_eq!(restored.user_id, expense.user_id);
        assert_eq!(restored.amount, expense.amount);
    }

    #[test]
    fn should_reject_document_with_corrupt_id() {
        let entity = ExpenseEntity {
            id: "not-a-uuid".to_string(),
            user_id: "user-1".to_string(),
            title: "Groceries".to_string(),
            amount: 1.0,
            category: "Food".to_string(),
            description: None,
            date: bson::DateTime::now(),
            created_at: bson::DateTime::now(),
            updated_at: bson::DateTime::now(),
        };

        assert_eq!(
            entity.into_domain().unwrap_err(),
            RepositoryError::DatabaseError
        );
    }
}
