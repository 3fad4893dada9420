use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::instrument;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::{USERS_COLLECTION, database_error, is_duplicate_key};

pub struct UserRepositoryMongo {
    collection: Collection<UserEntity>,
}

impl UserRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let entity = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(database_error)?;

        entity.map(UserEntity::into_domain).transpose()
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(UserEntity::from_domain(user))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    RepositoryError::Duplicated
                } else {
                    database_error(e)
                }
            })?;

        Ok(())
    }
}
