use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::config::DatabaseConfig;
use crate::db::error::DatabaseError;

/// Shared Postgres connection pool, created once at startup and cloned into
/// whatever needs database access.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let config = DatabaseConfig {
            database_url: database_url.to_string(),
            ..DatabaseConfig::default()
        };
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        debug!(
            "Connecting to database (max_connections={}, acquire_timeout={}s)",
            config.max_connections, config.acquire_timeout_seconds
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await?;

        info!("Database pool ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
