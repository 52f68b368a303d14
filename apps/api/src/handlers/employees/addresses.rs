use workforce_domain::AddressId;

use super::*;

/// Adding an address answers 200 with the owning employee.
pub async fn add_address_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<AddressRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .add_address(EmployeeId::new(employee_id), payload.into())
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn update_address_handler(
    State(state): State<AppState>,
    Path((employee_id, address_id)): Path<(i64, i64)>,
    Json(payload): Json<AddressRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_address(
            EmployeeId::new(employee_id),
            AddressId::new(address_id),
            payload.into(),
        )
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn remove_address_handler(
    State(state): State<AppState>,
    Path((employee_id, address_id)): Path<(i64, i64)>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .remove_address(EmployeeId::new(employee_id), AddressId::new(address_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}
