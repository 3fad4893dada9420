use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;

use crate::db::{from_bson_datetime, to_bson_datetime};

/// Document stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl UserEntity {
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
        }
    }

    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|_| RepositoryError::DatabaseError)?;
        Ok(User::from_repository(
            id,
            self.name,
            self.email,
            self.password_hash,
            from_bson_datetime(self.created_at),
            from_bson_datetime(self.updated_at),
        ))
    }
}
