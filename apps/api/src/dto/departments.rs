use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use workforce_application::{DepartmentInput, DepartmentRoster};
use workforce_domain::Department;

use super::employees::EmployeeSummaryResponse;

/// Incoming payload for department creation and replacement.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/department-request.ts"
)]
pub struct DepartmentRequest {
    pub department_name: String,
    pub description: String,
    pub department_type: String,
    #[serde(default)]
    pub responsibilities: Option<String>,
}

impl From<DepartmentRequest> for DepartmentInput {
    fn from(request: DepartmentRequest) -> Self {
        Self {
            name: request.department_name,
            description: request.description,
            department_type: request.department_type,
            responsibilities: request.responsibilities,
        }
    }
}

/// API representation of a department.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/department-response.ts"
)]
pub struct DepartmentResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub department_name: String,
    pub description: String,
    pub department_type: String,
    pub responsibilities: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        let details = department.details();

        Self {
            id: department.id().as_i64(),
            department_name: details.name().to_owned(),
            description: details.description().to_owned(),
            department_type: details.department_type().as_str().to_owned(),
            responsibilities: details.responsibilities().map(ToOwned::to_owned),
            created_at: department.created_at(),
            updated_at: department.updated_at(),
        }
    }
}

/// Department together with summaries of its members.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/department-with-employees-response.ts"
)]
pub struct DepartmentWithEmployeesResponse {
    pub department: DepartmentResponse,
    pub employees: Vec<EmployeeSummaryResponse>,
}

impl From<DepartmentRoster> for DepartmentWithEmployeesResponse {
    fn from(roster: DepartmentRoster) -> Self {
        Self {
            department: DepartmentResponse::from(roster.department),
            employees: roster
                .employees
                .into_iter()
                .map(EmployeeSummaryResponse::from)
                .collect(),
        }
    }
}
