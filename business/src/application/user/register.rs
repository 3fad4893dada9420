use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenService};
use crate::domain::user::use_cases::register::{
    AuthSession, RegisterUserParams, RegisterUserUseCase,
};
use crate::domain::user::value_objects::{Email, validate_password};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<AuthSession, UserError> {
        let email = Email::parse(&params.email)?;
        validate_password(&params.password)?;

        self.logger
            .info(&format!("Registering user: {}", email.as_str()));

        if self.repository.find_by_email(email.as_str()).await?.is_some() {
            self.logger.warn("Registration rejected, email already taken");
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&params.password)?;
        let user = User::new(&params.name, email, password_hash)?;

        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        let token = self.tokens.issue(&user.user_id())?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(AuthSession { user, token })
    }
}
