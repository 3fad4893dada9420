use async_trait::async_trait;

use super::register::AuthSession;
use crate::domain::user::errors::UserError;

pub struct LoginUserParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, params: LoginUserParams) -> Result<AuthSession, UserError>;
}
