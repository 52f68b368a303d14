//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod address;
mod contact;
mod department;
mod employee;
mod ids;
mod security;
mod user;

pub use address::{Address, AddressDetails, AddressType};
pub use contact::{EmailAddress, PhoneNumber};
pub use department::{
    DEPARTMENT_DESCRIPTION_MAX_LENGTH, DEPARTMENT_NAME_MAX_LENGTH,
    DEPARTMENT_RESPONSIBILITIES_MAX_LENGTH, Department, DepartmentDetails, DepartmentType,
};
pub use employee::{
    ContactDetails, EMPLOYEE_CODE_MAX_LENGTH, EMPLOYEE_CODE_MIN_LENGTH, Employee, EmployeeCode,
    EmployeeProfile, EmployeeSummary, Gender,
};
pub use ids::{AddressId, AdminUserId, DepartmentId, EmployeeId};
pub use security::Operation;
pub use user::{USERNAME_MAX_LENGTH, Username};
