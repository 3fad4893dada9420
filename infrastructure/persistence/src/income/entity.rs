use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::income::model::Income;
use business::domain::shared::value_objects::UserId;

use crate::db::{from_bson_datetime, to_bson_datetime};

/// Document stored in the `incomes` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntity {
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

impl IncomeEntity {
    pub fn from_domain(income: &Income) -> Self {
        Self {
            id: income.id.to_string(),
            user_id: income.user_id.as_str().to_string(),
            title: income.title.clone(),
            amount: income.amount,
            category: income.category.clone(),
            description: income.description.clone(),
            date: to_bson_datetime(income.date),
            created_at: to_bson_datetime(income.created_at),
            updated_at: to_bson_datetime(income.updated_at),
        }
    }

    pub fn into_domain(self) -> Result<Income, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|_| RepositoryError::DatabaseError)?;
        Ok(Income::from_repository(
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
    use business::domain::income::model::NewIncomeProps;

    #[test]
    fn should_keep_owner_and_amount_when_mapping_to_document() {
        let income = Income::new(NewIncomeProps {
            user_id: UserId::new("user-1"),
            title: "Salary".to_string(),
            amount: 2500.0,
            category: "Job".to_string(),
            description: None,
            date: None,
        })
        .unwrap();

        let restored = IncomeEntity::from_domain(&income).into_domain().unwrap();

        assert_eq!(restored.id, income.id);
        assert_eq!(restored.user_id, income.user_id);
        assert_eq!(restored.amount, income.amount);
    }

    #[test]
    fn should_reject_document_with_corrupt_id() {
        let entity = IncomeEntity {
            id: "not-a-uuid".to_string(),
            user_id: "user-1".to_string(),
            title: "Salary".to_string(),
            amount: 1.0,
            category: "Job".to_string(),
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
