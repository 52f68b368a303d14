mod auth;
mod common;
mod departments;
mod employees;

pub use auth::{AdminLoginRequest, EmployeeLoginRequest, LoginResponse};
pub use common::HealthResponse;
pub use departments::{DepartmentRequest, DepartmentResponse, DepartmentWithEmployeesResponse};
pub use employees::{
    AddressRequest, AddressResponse, CreateEmployeeRequest, EmployeeResponse,
    EmployeeSearchQuery, EmployeeSummaryResponse, UpdateEmployeeRequest,
};
