use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::UserError;
use super::value_objects::Email;
use crate::domain::shared::value_objects::{UserId, non_blank};

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user from an already hashed password.
    pub fn new(name: &str, email: Email, password_hash: String) -> Result<Self, UserError> {
        let name = non_blank(name).ok_or(UserError::NameEmpty)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email: email.into_inner(),
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    /// The identifier carried by this user's auth tokens.
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id.to_string())
    }
}
