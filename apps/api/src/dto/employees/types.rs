use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::DepartmentResponse;

/// Address fields supplied by clients.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/address-request.ts"
)]
pub struct AddressRequest {
    pub address_type: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Incoming payload for employee creation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-employee-request.ts"
)]
pub struct CreateEmployeeRequest {
    pub name: String,
    #[ts(type = "string")]
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub employee_code: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub addresses: Vec<AddressRequest>,
}

/// Contact fields an employee record may change after creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-employee-request.ts"
)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

/// Query string for name search.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeSearchQuery {
    #[serde(default)]
    pub name: String,
}

/// API representation of an address.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/address-response.ts"
)]
pub struct AddressResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub address_type: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// API representation of an employee with owned addresses and memberships.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-response.ts"
)]
pub struct EmployeeResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    #[ts(type = "string")]
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub employee_code: String,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub emergency_contact: Option<String>,
    pub addresses: Vec<AddressResponse>,
    pub departments: Vec<DepartmentResponse>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Compact employee listing entry.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-summary-response.ts"
)]
pub struct EmployeeSummaryResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    pub employee_code: String,
}
