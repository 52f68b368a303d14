use workforce_application::{
    AuthService, AuthorizationService, BootstrapService, DepartmentService, EmployeeService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub authorization_service: AuthorizationService,
    pub bootstrap_service: BootstrapService,
    pub employee_service: EmployeeService,
    pub department_service: DepartmentService,
}
