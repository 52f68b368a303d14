//! Workforce API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use tracing::{info, warn};
use workforce_application::DEFAULT_ADMIN_USERNAME;
use workforce_core::AppError;

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let pool = api_services::connect_pool(&config).await?;

    if config.migrate_only {
        info!("migrate-only run finished");
        return Ok(());
    }

    let app_state = api_services::build_app_state(pool, &config)?;

    let report = app_state.bootstrap_service.run().await?;
    if report.default_admin_created {
        warn!(
            username = DEFAULT_ADMIN_USERNAME,
            "created development default admin account, change its password before deploying"
        );
    } else {
        info!("bootstrap complete");
    }

    let app = api_router::build_router(app_state, &config.cors_allowed_origin)?;
    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "workforce api listening");
    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
