pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use shared::telemetry;
use shared::{AssignmentRepository, AssignmentStore, DatabasePool, InMemoryAssignmentStore};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tracing::info;

use config::{AssignmentsConfig, StoreBackend};

pub use error::ApiError;
pub use models::AssignmentPayload;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssignmentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AssignmentStore>) -> Self {
        Self { store }
    }
}

/// Router settings that do not belong in request state.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub static_dir: Option<PathBuf>,
    pub cors_allowed_origins: Vec<String>,
}

impl From<&AssignmentsConfig> for AppOptions {
    fn from(config: &AssignmentsConfig) -> Self {
        Self {
            static_dir: Some(config.static_dir.clone()),
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        }
    }
}

pub fn create_app(state: AppState, options: &AppOptions) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/assignments", get(handlers::list_assignments))
        .route("/addAssignment", post(handlers::add_assignment))
        .route("/deleteAssignment", post(handlers::delete_assignment))
        .route(
            "/changeAssignmentStatus",
            post(handlers::change_assignment_status),
        );

    if let Some(static_dir) = &options.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(telemetry::middleware::trace_layer))
                .layer(middleware::cors_layer(&options.cors_allowed_origins))
                .layer(middleware::compression_layer()),
        )
        .with_state(state)
}

/// Connect the configured store backend, applying migrations for Postgres.
pub async fn build_store(config: &AssignmentsConfig) -> Result<Arc<dyn AssignmentStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let db_pool = DatabasePool::from_config(&config.database)
                .await
                .context("Failed to connect to database")?;
            db_pool
                .run_migrations()
                .await
                .context("Failed to run database migrations")?;
            info!("Using Postgres assignment store");
            Ok(Arc::new(AssignmentRepository::new(db_pool.pool())))
        }
        StoreBackend::Memory => {
            info!("Using in-memory assignment store");
            Ok(Arc::new(InMemoryAssignmentStore::new()))
        }
    }
}
