use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::expense::model::Expense;
use business::domain::expense::repository::ExpenseRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::ExpenseEntity;
use crate::db::{EXPENSES_COLLECTION, database_error, is_duplicate_key};

pub struct ExpenseRepositoryMongo {
    collection: Collection<ExpenseEntity>,
}

impl ExpenseRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(EXPENSES_COLLECTION),
        }
    }
}

#[async_trait]
impl ExpenseRepository for ExpenseRepositoryMongo {
    #[instrument(skip(self))]
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Expense>, RepositoryError> {
        let options = FindOptions::builder()
            .sort(doc! { "date": -1, "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id.as_str() })
            .with_options(options)
            .await
            .map_err(database_error)?;
        let entities: Vec<ExpenseEntity> = cursor.try_collect().await.map_err(database_error)?;

        entities.into_iter().map(ExpenseEntity::into_domain).collect()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Expense, RepositoryError> {
        self.collection
            .find_one(doc! { "_id": id.to_string(), "user_id": user_id.as_str() })
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    #[instrument(skip(self, expense), fields(expense_id = %expense.id))]
    async fn create(&self, expense: &Expense) -> Result<(), RepositoryError> {
        let entity = ExpenseEntity::from_domain(expense);

        self.collection.insert_one(&entity).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepositoryError::Duplicated
            } else {
                database_error(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, expense), fields(expense_id = %expense.id))]
    async fn update(&self, expense: &Expense) -> Result<(), RepositoryError> {
        let entity = ExpenseEntity::from_domain(expense);
        let filter = doc! { "_id": entity.id.as_str(), "user_id": entity.user_id.as_str() };

        // No upsert: a record deleted since it was read stays deleted.
        let result = self
            .collection
            .replace_one(filter, &entity)
            .await
            .map_err(database_error)?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string(), "user_id": user_id.as_str() })
            .await
            .map_err(database_error)?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
