//! Application services and ports.

#![forbid(unsafe_code)]

mod auth_ports;
mod auth_service;
mod authorization_service;
mod bootstrap_service;
mod department_service;
mod directory_ports;
mod employee_service;

#[cfg(test)]
mod test_fakes;

pub use auth_ports::{
    AdminUserRecord, AdminUserRepository, IssuedToken, PasswordHasher, TokenIssuer,
};
pub use auth_service::{AuthService, LoginGrant};
pub use authorization_service::{AccessDecision, AuthorizationService};
pub use bootstrap_service::{
    BootstrapReport, BootstrapService, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
};
pub use department_service::{DepartmentInput, DepartmentRoster, DepartmentService};
pub use directory_ports::{DepartmentRepository, EmployeeRepository};
pub use employee_service::{
    AddressInput, CreateEmployeeInput, EmployeeService, UpdateEmployeeInput,
};
