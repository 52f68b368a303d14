use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use workforce_core::AppError;

use crate::api_config::ApiConfig;

pub async fn connect_pool(config: &ApiConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;
    info!("database migrations applied");

    Ok(pool)
}
