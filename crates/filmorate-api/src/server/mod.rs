//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use filmorate_common::{AppConfig, AppError, AppResult, ConfigError, StorageBackend};
use filmorate_db::{bootstrap, create_pool, DatabaseConfig, MemoryStore};
use filmorate_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the base stack only, so rate limiting never fails them.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            ServiceContext::in_memory(&MemoryStore::new())
        }
        StorageBackend::Postgres => {
            let database = config.database.as_ref().ok_or_else(|| {
                AppError::Config(ConfigError::MissingVar("DATABASE_URL"))
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&DatabaseConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            bootstrap(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            ServiceContext::postgres(pool)
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Bind a listener on `host:port` from the configuration
pub async fn bind(config: &AppConfig) -> AppResult<TcpListener> {
    let addr = config.api.address();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to bind to {addr}: {e}")))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| AppError::internal(anyhow::anyhow!("Listener has no address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let listener = bind(&config).await?;
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, listener).await
}
