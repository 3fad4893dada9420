use std::sync::Arc;

use auth::{Argon2PasswordHasher, JwtTokenService};
use logger::TracingLogger;
use mongodb::Database;
use persistence::expense::repository::ExpenseRepositoryMongo;
use persistence::income::repository::IncomeRepositoryMongo;
use persistence::user::repository::UserRepositoryMongo;

use business::application::expense::create::CreateExpenseUseCaseImpl;
use business::application::expense::delete::DeleteExpenseUseCaseImpl;
use business::application::expense::get_all::GetAllExpensesUseCaseImpl;
use business::application::expense::get_by_id::GetExpenseByIdUseCaseImpl;
use business::application::expense::update::UpdateExpenseUseCaseImpl;
use business::application::income::create::CreateIncomeUseCaseImpl;
use business::application::income::delete::DeleteIncomeUseCaseImpl;
use business::application::income::get_all::GetAllIncomesUseCaseImpl;
use business::application::income::get_by_id::GetIncomeByIdUseCaseImpl;
use business::application::income::update::UpdateIncomeUseCaseImpl;
use business::application::user::login::LoginUserUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::domain::expense::repository::ExpenseRepository;
use business::domain::income::repository::IncomeRepository;
use business::domain::user::repository::UserRepository;

use crate::api::expense::routes::ExpenseApi;
use crate::api::health::routes::HealthApi;
use crate::api::income::routes::IncomeApi;
use crate::api::security::AuthGate;
use crate::api::user::cookie::AuthCookie;
use crate::api::user::routes::UserApi;
use crate::config::auth_config::AuthConfig;

/// Repository adapters behind the use cases.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub incomes: Arc<dyn IncomeRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
}

impl Repositories {
    pub fn mongo(database: &Database) -> Self {
        Self {
            users: Arc::new(UserRepositoryMongo::new(database)),
            incomes: Arc::new(IncomeRepositoryMongo::new(database)),
            expenses: Arc::new(ExpenseRepositoryMongo::new(database)),
        }
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub income_api: IncomeApi,
    pub expense_api: ExpenseApi,
    pub auth_gate: AuthGate,
}

impl DependencyContainer {
    pub fn new(database: Database, auth: &AuthConfig) -> Self {
        Self::with_repositories(Repositories::mongo(&database), auth)
    }

    pub fn with_repositories(repositories: Repositories, auth: &AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let Repositories {
            users,
            incomes,
            expenses,
        } = repositories;

        // Security adapters
        let tokens = Arc::new(JwtTokenService::new(&auth.jwt_secret, auth.token_ttl));
        let hasher = Arc::new(Argon2PasswordHasher);

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: users.clone(),
            hasher: hasher.clone(),
            tokens: tokens.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUserUseCaseImpl {
            repository: users,
            hasher,
            tokens: tokens.clone(),
            logger: logger.clone(),
        });

        // Income use cases
        let create_income_use_case = Arc::new(CreateIncomeUseCaseImpl {
            repository: incomes.clone(),
            logger: logger.clone(),
        });
        let get_all_incomes_use_case = Arc::new(GetAllIncomesUseCaseImpl {
            repository: incomes.clone(),
            logger: logger.clone(),
        });
        let get_income_by_id_use_case = Arc::new(GetIncomeByIdUseCaseImpl {
            repository: incomes.clone(),
            logger: logger.clone(),
        });
        let update_income_use_case = Arc::new(UpdateIncomeUseCaseImpl {
            repository: incomes.clone(),
            logger: logger.clone(),
        });
        let delete_income_use_case = Arc::new(DeleteIncomeUseCaseImpl {
            repository: incomes,
            logger: logger.clone(),
        });

        // Expense use cases
        let create_expense_use_case = Arc::new(CreateExpenseUseCaseImpl {
            repository: expenses.clone(),
            logger: logger.clone(),
        });
        let get_all_expenses_use_case = Arc::new(GetAllExpensesUseCaseImpl {
            repository: expenses.clone(),
            logger: logger.clone(),
        });
        let get_expense_by_id_use_case = Arc::new(GetExpenseByIdUseCaseImpl {
            repository: expenses.clone(),
            logger: logger.clone(),
        });
        let update_expense_use_case = Arc::new(UpdateExpenseUseCaseImpl {
            repository: expenses.clone(),
            logger: logger.clone(),
        });
        let delete_expense_use_case = Arc::new(DeleteExpenseUseCaseImpl {
            repository: expenses,
            logger,
        });

        let user_api = UserApi::new(
            register_use_case,
            login_use_case,
            AuthCookie::from_config(auth),
        );

        let income_api = IncomeApi::new(
            create_income_use_case,
            get_all_incomes_use_case,
            get_income_by_id_use_case,
            update_income_use_case,
            delete_income_use_case,
        );

        let expense_api = ExpenseApi::new(
            create_expense_use_case,
            get_all_expenses_use_case,
            get_expense_by_id_use_case,
            update_expense_use_case,
            delete_expense_use_case,
        );

        Self {
            health_api: HealthApi,
            user_api,
            income_api,
            expense_api,
            auth_gate: AuthGate::new(tokens),
        }
    }
}
