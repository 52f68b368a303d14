use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use tracing::{info, warn};
use workforce_core::AppError;

use crate::dto::{AdminLoginRequest, EmployeeLoginRequest, LoginResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /auth/admin/login - Exchange admin credentials for a bearer token.
pub async fn admin_login_handler(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let grant = state
        .auth_service
        .authenticate_admin(&payload.username, &payload.password)
        .await
        .inspect_err(|error| {
            if matches!(error, AppError::InvalidCredentials) {
                warn!(username = %payload.username, "admin login rejected");
            }
        })?;

    info!(username = %grant.subject_name, "admin login succeeded");
    Ok(Json(LoginResponse::from(grant)))
}

/// POST /auth/employee/login - Exchange employee code and birth date for a bearer token.
pub async fn employee_login_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeLoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let date_of_birth = NaiveDate::from_str(&payload.date_of_birth).map_err(|_| {
        AppError::Validation("dateOfBirth must be formatted as YYYY-MM-DD".to_owned())
    })?;

    let grant = state
        .auth_service
        .authenticate_employee(&payload.employee_code, date_of_birth)
        .await
        .inspect_err(|error| {
            if matches!(error, AppError::InvalidCredentials) {
                warn!(employee_code = %payload.employee_code, "employee login rejected");
            }
        })?;

    info!(employee_code = %grant.subject_name, "employee login succeeded");
    Ok(Json(LoginResponse::from(grant)))
}
