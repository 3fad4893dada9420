use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use poem::endpoint::BoxEndpoint;
use poem::listener::{Listener, TcpListener};
use poem::middleware::{CookieJarManager, Tracing};
use poem::{EndpointExt, Response, Route, Server as PoemServer};
use poem_openapi::OpenApiService;

use crate::config::app_config::AppConfig;
use crate::config::cors_config::{AllowedOrigins, CorsConfig};
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::pipeline::{deadline, error_response, origin_guard};
use crate::setup::startup::StartupError;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Assembles routes and middleware into the application endpoint.
    pub fn app(
        container: DependencyContainer,
        cors: &CorsConfig,
        request_timeout: Duration,
        public_url: &str,
    ) -> BoxEndpoint<'static, Response> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.user_api,
                container.income_api,
                container.expense_api,
            ),
            "Budget Tracker API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        // Extractor, routing and auth failures leave here as `{name, message}`.
        let routes = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_all_error(|err| async move { error_response(err) })
            .data(container.auth_gate)
            .with(CookieJarManager::new())
            .with(cors.init_cors());

        let guarded = origin_guard(routes, Arc::new(cors.clone()));
        deadline(guarded, request_timeout).with(Tracing).map_to_response().boxed()
    }

    /// Binds the listener and serves until `shutdown` resolves.
    pub async fn run<S>(
        config: AppConfig,
        container: DependencyContainer,
        shutdown: S,
    ) -> Result<(), StartupError>
    where
        S: Future<Output = ()> + Send,
    {
        let addr = config.server.bind_address();
        if config.cors.allowed_origins == AllowedOrigins::Any {
            tracing::warn!("CORS allows any origin with credentials");
        }

        let app = Self::app(
            container,
            &config.cors,
            config.server.request_timeout,
            &format!("http://{addr}"),
        );

        let acceptor = TcpListener::bind(addr.clone())
            .into_acceptor()
            .await
            .map_err(|source| StartupError::Bind {
                address: addr.clone(),
                source,
            })?;

        tracing::info!("Server running at http://{addr}");
        tracing::info!("Swagger UI at http://{addr}/docs");
        tracing::info!("OpenAPI JSON at http://{addr}/openapi.json");

        PoemServer::new_with_acceptor(acceptor)
            .run_with_graceful_shutdown(app, shutdown, Some(SHUTDOWN_GRACE))
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
