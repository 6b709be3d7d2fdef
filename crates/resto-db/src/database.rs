use resto_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::category_repository::CategoryRepository;
use crate::config::DatabaseConfig;
use crate::error::map_sqlx_error;
use crate::restaurant_repository::RestaurantRepository;
use crate::user_repository::UserRepository;

/// Owns the connection pool and hands out repositories.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to connect: {e}")))?;

        tracing::debug!(max_connections = config.max_connections, "Connection pool ready");
        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Get a [`CategoryRepository`] backed by this pool.
    pub fn category_repo(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Get a [`RestaurantRepository`] backed by this pool.
    pub fn restaurant_repo(&self) -> RestaurantRepository {
        RestaurantRepository::new(self.pool.clone())
    }

    /// Get a [`UserRepository`] backed by this pool.
    pub fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
