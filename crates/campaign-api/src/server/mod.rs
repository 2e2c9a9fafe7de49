//! Server setup and initialization
//!
//! Wires the Postgres adapters into the service context and serves the router.

use std::sync::Arc;

use axum::Router;
use campaign_common::{AppConfig, AppError, JwtService};
use campaign_db::{
    create_pool, run_migrations, PgCampaignRepository, PgPool, PgReactionRepository,
    PgUnitOfWorkFactory, PoolConfig,
};
use campaign_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, rate_limit};
use crate::routes::{api_routes, health_routes, API_PREFIX};
use crate::state::AppState;

/// Build the complete application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limiter settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let limited = rate_limit(api_routes(), &config.rate_limit)?;
    let v1 = limited.merge(health_routes());
    let router = Router::new().nest(API_PREFIX, v1);

    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    Ok(router.with_state(state))
}

/// Wire the service context over a pool
pub fn build_service_context(pool: &PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    ServiceContextBuilder::new()
        .campaign_repo(Arc::new(PgCampaignRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .unit_of_work(Arc::new(PgUnitOfWorkFactory::new(pool.clone())))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Connect, migrate if enabled, and build the shared state
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
        info!("Database migrations applied");
    }

    let service_context = build_service_context(&pool, &config)?;
    Ok(AppState::new(service_context, pool, config))
}

/// Serve the application on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Listener has no local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}
