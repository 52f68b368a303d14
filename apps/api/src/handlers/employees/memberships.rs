use super::*;

pub async fn assign_department_handler(
    State(state): State<AppState>,
    Path((employee_id, department_id)): Path<(i64, i64)>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .assign_department(EmployeeId::new(employee_id), DepartmentId::new(department_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn remove_department_handler(
    State(state): State<AppState>,
    Path((employee_id, department_id)): Path<(i64, i64)>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .remove_department(EmployeeId::new(employee_id), DepartmentId::new(department_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}
