use workforce_application::{AddressInput, CreateEmployeeInput, UpdateEmployeeInput};
use workforce_domain::{Address, Employee, EmployeeSummary};

use super::types::{
    AddressRequest, AddressResponse, CreateEmployeeRequest, EmployeeResponse,
    EmployeeSummaryResponse, UpdateEmployeeRequest,
};
use crate::dto::DepartmentResponse;

impl From<AddressRequest> for AddressInput {
    fn from(request: AddressRequest) -> Self {
        Self {
            address_type: request.address_type,
            street: request.street,
            city: request.city,
            state: request.state,
            country: request.country,
            postal_code: request.postal_code,
        }
    }
}

impl From<CreateEmployeeRequest> for CreateEmployeeInput {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            name: request.name,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            employee_code: request.employee_code,
            email: request.email,
            mobile_number: request.mobile_number,
            emergency_contact: request.emergency_contact,
            addresses: request.addresses.into_iter().map(AddressInput::from).collect(),
        }
    }
}

impl From<UpdateEmployeeRequest> for UpdateEmployeeInput {
    fn from(request: UpdateEmployeeRequest) -> Self {
        Self {
            email: request.email,
            mobile_number: request.mobile_number,
            emergency_contact: request.emergency_contact,
        }
    }
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        let details = address.details();

        Self {
            id: address.id().as_i64(),
            address_type: details.address_type().as_str().to_owned(),
            street: details.street().to_owned(),
            city: details.city().to_owned(),
            state: details.state().to_owned(),
            country: details.country().to_owned(),
            postal_code: details.postal_code().to_owned(),
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let profile = employee.profile();
        let contact = profile.contact();

        Self {
            id: employee.id().as_i64(),
            name: profile.name().to_owned(),
            date_of_birth: profile.date_of_birth(),
            gender: profile.gender().as_str().to_owned(),
            employee_code: profile.employee_code().as_str().to_owned(),
            email: contact.email.as_ref().map(|email| email.as_str().to_owned()),
            mobile_number: contact
                .mobile_number
                .as_ref()
                .map(|number| number.as_str().to_owned()),
            emergency_contact: contact
                .emergency_contact
                .as_ref()
                .map(|number| number.as_str().to_owned()),
            addresses: employee.addresses().iter().map(AddressResponse::from).collect(),
            departments: employee
                .departments()
                .iter()
                .cloned()
                .map(DepartmentResponse::from)
                .collect(),
            created_at: employee.created_at(),
            updated_at: employee.updated_at(),
        }
    }
}

impl From<EmployeeSummary> for EmployeeSummaryResponse {
    fn from(summary: EmployeeSummary) -> Self {
        Self {
            id: summary.id.as_i64(),
            name: summary.name,
            employee_code: summary.employee_code,
        }
    }
}
