use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use tracing::info;
use workforce_core::Principal;
use workforce_domain::DepartmentId;

use crate::dto::{DepartmentRequest, DepartmentResponse, DepartmentWithEmployeesResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_departments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let departments = state
        .department_service
        .list_departments()
        .await?
        .into_iter()
        .map(DepartmentResponse::from)
        .collect();

    Ok(Json(departments))
}

pub async fn get_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .department_service
        .get_department(DepartmentId::new(department_id))
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

pub async fn department_employees_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<DepartmentWithEmployeesResponse>> {
    let roster = state
        .department_service
        .get_department_with_employees(DepartmentId::new(department_id))
        .await?;

    Ok(Json(DepartmentWithEmployeesResponse::from(roster)))
}

pub async fn create_department_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<DepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    let department = state
        .department_service
        .create_department(payload.into())
        .await?;

    info!(
        subject = principal.subject_name(),
        department_id = department.id().as_i64(),
        "department created"
    );
    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

pub async fn update_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
    Json(payload): Json<DepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .department_service
        .update_department(DepartmentId::new(department_id), payload.into())
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

pub async fn delete_department_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(department_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .department_service
        .delete_department(DepartmentId::new(department_id))
        .await?;

    info!(
        subject = principal.subject_name(),
        department_id, "department deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
