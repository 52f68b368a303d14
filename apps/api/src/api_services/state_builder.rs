use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;
use workforce_application::{
    AdminUserRepository, AuthService, AuthorizationService, BootstrapService,
    DepartmentRepository, DepartmentService, EmployeeRepository, EmployeeService,
};
use workforce_core::AppError;
use workforce_infrastructure::{
    Argon2PasswordHasher, JwtTokenIssuer, PostgresAdminUserRepository,
    PostgresDepartmentRepository, PostgresEmployeeRepository,
};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    assemble_app_state(
        Arc::new(PostgresAdminUserRepository::new(pool.clone())),
        Arc::new(PostgresEmployeeRepository::new(pool.clone())),
        Arc::new(PostgresDepartmentRepository::new(pool)),
        config.jwt_secret.as_bytes(),
        config.token_ttl()?,
        config.bootstrap_default_admin,
    )
}

/// Wires services over any set of repository adapters.
pub fn assemble_app_state(
    admin_users: Arc<dyn AdminUserRepository>,
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
    jwt_secret: &[u8],
    token_ttl: Duration,
    seed_default_admin: bool,
) -> Result<AppState, AppError> {
    let password_hasher = Arc::new(Argon2PasswordHasher::new());
    let token_issuer = Arc::new(JwtTokenIssuer::new(jwt_secret)?);

    let employee_service = EmployeeService::new(employees.clone(), departments.clone());
    let department_service = DepartmentService::new(departments, employees);

    Ok(AppState {
        auth_service: AuthService::new(
            admin_users.clone(),
            employee_service.clone(),
            password_hasher.clone(),
            token_issuer,
            token_ttl,
        ),
        authorization_service: AuthorizationService::new(),
        bootstrap_service: BootstrapService::new(admin_users, password_hasher, seed_default_admin),
        employee_service,
        department_service,
    })
}
