use serde::{Deserialize, Serialize};
use ts_rs::TS;
use workforce_application::LoginGrant;

/// Incoming payload for administrator login.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/admin-login-request.ts"
)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Incoming payload for employee login.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-login-request.ts"
)]
pub struct EmployeeLoginRequest {
    pub employee_code: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub date_of_birth: String,
}

/// Token issued by a successful login.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: &'static str,
    /// Present for administrators only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub id: Option<i64>,
    pub username: String,
    pub roles: Vec<String>,
}

impl From<LoginGrant> for LoginResponse {
    fn from(grant: LoginGrant) -> Self {
        Self {
            token: grant.token.token,
            token_type: "Bearer",
            id: grant.subject_id,
            username: grant.subject_name,
            roles: grant
                .roles
                .into_iter()
                .map(|role| role.authority().to_owned())
                .collect(),
        }
    }
}
