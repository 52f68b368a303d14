use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use tracing::info;
use workforce_core::Principal;
use workforce_domain::{DepartmentId, Employee, EmployeeId};

use crate::dto::{
    AddressRequest, CreateEmployeeRequest, EmployeeResponse, EmployeeSearchQuery,
    UpdateEmployeeRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod addresses;
mod memberships;

pub use addresses::{add_address_handler, remove_address_handler, update_address_handler};
pub use memberships::{assign_department_handler, remove_department_handler};

fn to_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}

pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;

    Ok(Json(to_responses(employees)))
}

pub async fn search_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.search_by_name(&query.name).await?;

    Ok(Json(to_responses(employees)))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .get_employee(EmployeeId::new(employee_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn get_employee_by_code_handler(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .get_employee_by_code(&employee_code)
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn list_department_employees_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .employee_service
        .list_by_department(DepartmentId::new(department_id))
        .await?;

    Ok(Json(to_responses(employees)))
}

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create_employee(payload.into())
        .await?;

    info!(
        subject = principal.subject_name(),
        employee_id = employee.id().as_i64(),
        "employee created"
    );
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(EmployeeId::new(employee_id), payload.into())
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(employee_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .employee_service
        .delete_employee(EmployeeId::new(employee_id))
        .await?;

    info!(
        subject = principal.subject_name(),
        employee_id, "employee deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
