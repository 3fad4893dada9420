#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use poem::Response;
use poem::endpoint::BoxEndpoint;
use poem::test::TestClient;
use uuid::Uuid;

use auth::JwtTokenService;
use business::domain::errors::RepositoryError;
use business::domain::expense::model::Expense;
use business::domain::expense::repository::ExpenseRepository;
use business::domain::income::model::Income;
use business::domain::income::repository::IncomeRepository;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;
use business::domain::user::services::TokenService;
use rest_api::config::auth_config::AuthConfig;
use rest_api::config::cors_config::CorsConfig;
use rest_api::setup::dependency_injection::{DependencyContainer, Repositories};
use rest_api::setup::server::Server;

pub const SECRET: &str = "integration-test-secret";
pub const GOOD_ORIGIN: &str = "http://good.example";
pub const EVIL_ORIGIN: &str = "http://evil.example";

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    calls: AtomicUsize,
}

impl InMemoryUsers {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Duplicated);
        }
        users.push(user.clone());
        Ok(())
    }
}

macro_rules! in_memory_records {
    ($name:ident, $model:ty, $repository:ident) => {
        #[derive(Default)]
        pub struct $name {
            records: Mutex<Vec<$model>>,
            calls: AtomicUsize,
        }

        impl $name {
            pub fn calls(&self) -> usize {
                self.calls.load(Ordering::SeqCst)
            }

            pub fn records(&self) -> Vec<$model> {
                self.records.lock().unwrap().clone()
            }
        }

        #[async_trait]
        impl $repository for $name {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<$model>, RepositoryError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                let mut owned: Vec<$model> = self
                    .records
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|record| &record.user_id == user_id)
                    .cloned()
                    .collect();
                owned.sort_by(|a, b| b.date.cmp(&a.date));
                Ok(owned)
            }

            async fn get_by_id(
                &self,
                id: Uuid,
                user_id: &UserId,
            ) -> Result<$model, RepositoryError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.records
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|record| record.id == id && &record.user_id == user_id)
                    .cloned()
                    .ok_or(RepositoryError::NotFound)
            }

            async fn create(&self, record: &$model) -> Result<(), RepositoryError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                let mut records = self.records.lock().unwrap();
                if records.iter().any(|existing| existing.id == record.id) {
                    return Err(RepositoryError::Duplicated);
                }
                records.push(record.clone());
                Ok(())
            }

            async fn update(&self, record: &$model) -> Result<(), RepositoryError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                let mut records = self.records.lock().unwrap();
                let existing = records
                    .iter_mut()
                    .find(|existing| existing.id == record.id && existing.user_id == record.user_id)
                    .ok_or(RepositoryError::NotFound)?;
                *existing = record.clone();
                Ok(())
            }

            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                let mut records = self.records.lock().unwrap();
                let before = records.len();
                records.retain(|record| !(record.id == id && &record.user_id == user_id));
                if records.len() == before {
                    return Err(RepositoryError::NotFound);
                }
                Ok(())
            }
        }
    };
}

in_memory_records!(InMemoryIncomes, Income, IncomeRepository);
in_memory_records!(InMemoryExpenses, Expense, ExpenseRepository);

pub struct TestApp {
    pub cli: TestClient<BoxEndpoint<'static, Response>>,
    pub users: Arc<InMemoryUsers>,
    pub incomes: Arc<InMemoryIncomes>,
    pub expenses: Arc<InMemoryExpenses>,
}

impl TestApp {
    /// App with the default test allow-set.
    pub fn new() -> Self {
        Self::with_origins(GOOD_ORIGIN)
    }

    pub fn with_origins(origins: &str) -> Self {
        let users = Arc::new(InMemoryUsers::default());
        let incomes = Arc::new(InMemoryIncomes::default());
        let expenses = Arc::new(InMemoryExpenses::default());

        let container = DependencyContainer::with_repositories(
            Repositories {
                users: users.clone(),
                incomes: incomes.clone(),
                expenses: expenses.clone(),
            },
            &auth_config(),
        );
        let app = Server::app(
            container,
            &CorsConfig::parse(origins),
            Duration::from_secs(5),
            "http://localhost:3000",
        );

        Self {
            cli: TestClient::new(app),
            users,
            incomes,
            expenses,
        }
    }
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: SECRET.to_string(),
        token_ttl: Duration::from_secs(3600),
        cookie_secure: false,
    }
}

/// A token accepted by [`TestApp`] for `user_id`.
pub fn token_for(user_id: &str) -> String {
    JwtTokenService::new(SECRET, Duration::from_secs(3600))
        .issue(&UserId::new(user_id))
        .unwrap()
}

pub fn auth_cookie(user_id: &str) -> String {
    format!("token={}", token_for(user_id))
}

/// A correctly signed cookie whose token expired an hour ago.
pub fn expired_auth_cookie(user_id: &str) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let claims = serde_json::json!({"sub": user_id, "iat": now - 7200, "exp": now - 3600});
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    format!("token={token}")
}

/// Extracts the token value from a `Set-Cookie` header.
pub fn token_from_set_cookie(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("token="))
        .unwrap_or_default()
        .to_string()
}
