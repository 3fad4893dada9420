use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenService};
use crate::domain::user::use_cases::login::{LoginUserParams, LoginUserUseCase};
use crate::domain::user::use_cases::register::AuthSession;
use crate::domain::user::value_objects::Email;

pub struct LoginUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUserUseCase for LoginUserUseCaseImpl {
    async fn execute(&self, params: LoginUserParams) -> Result<AuthSession, UserError> {
        // A malformed email cannot belong to anyone; answer like a wrong password.
        let email = Email::parse(&params.email).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Failed login attempt for user: {}", user.id));
            return Err(UserError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id())?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(AuthSession { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::domain::user::services::{PasswordHashError, TokenError};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn create(&self, user: &User) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Hasher {}

        impl PasswordHasher for Hasher {
            fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
            fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordHashError>;
        }
    }

    mock! {
        pub Tokens {}

        impl TokenService for Tokens {
            fn issue(&self, user_id: &UserId) -> Result<String, TokenError>;
            fn verify(&self, token: &str) -> Result<UserId, TokenError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_user(id: Uuid) -> User {
        User::from_repository(
            id,
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "stored-hash".to_string(),
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    fn hasher_accepting(password: &'static str) -> Arc<dyn PasswordHasher> {
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify()
            .returning(move |given, _| Ok(given == password));
        Arc::new(hasher)
    }

    fn tokens() -> Arc<dyn TokenService> {
        let mut tokens = MockTokens::new();
        tokens
            .expect_issue()
            .returning(|user_id| Ok(format!("token-for-{user_id}")));
        Arc::new(tokens)
    }

    #[tokio::test]
    async fn should_issue_token_for_subject_when_password_matches() {
        let user_id = Uuid::new_v4();
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(move |_| Ok(Some(stored_user(user_id))));

        let use_case = LoginUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher_accepting("correct-horse"),
            tokens: tokens(),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LoginUserParams {
                email: "JANE@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, user_id);
        assert_eq!(session.token, format!("token-for-{user_id}"));
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Ok(Some(stored_user(Uuid::new_v4()))));

        let use_case = LoginUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher_accepting("correct-horse"),
            tokens: tokens(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginUserParams {
                email: "jane@example.com".to_string(),
                password: "battery-staple".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_answer_unknown_email_like_wrong_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));

        let use_case = LoginUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: hasher_accepting("correct-horse"),
            tokens: tokens(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginUserParams {
                email: "nobody@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }
}
