mod conversions;
mod types;

pub use types::{
    AddressRequest, AddressResponse, CreateEmployeeRequest, EmployeeResponse,
    EmployeeSearchQuery, EmployeeSummaryResponse, UpdateEmployeeRequest,
};
