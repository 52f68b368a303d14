//! Employee directory service.
//!
//! Owns validation of employee input and keeps the owning side of the
//! employee relationships (addresses, department memberships) consistent.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use workforce_core::{AppError, AppResult};
use workforce_domain::{
    AddressDetails, AddressType, ContactDetails, DepartmentId, Employee, EmployeeCode, EmployeeId,
    EmployeeProfile, Gender,
};

use crate::{DepartmentRepository, EmployeeRepository};

/// Raw address fields supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInput {
    /// `PERMANENT`, `RESIDENTIAL` or `CORRESPONDENCE`.
    pub address_type: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
}

impl AddressInput {
    fn into_details(self) -> AppResult<AddressDetails> {
        AddressDetails::new(
            AddressType::from_str(&self.address_type)?,
            self.street,
            self.city,
            self.state,
            self.country,
            self.postal_code,
        )
    }
}

/// Input payload for employee creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeInput {
    /// Full name.
    pub name: String,
    /// Date of birth, strictly in the past.
    pub date_of_birth: NaiveDate,
    /// `MALE`, `FEMALE` or `OTHER`.
    pub gender: String,
    /// Unique employee code.
    pub employee_code: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Optional ten-digit mobile number.
    pub mobile_number: Option<String>,
    /// Optional ten-digit emergency contact number.
    pub emergency_contact: Option<String>,
    /// Addresses stored together with the employee.
    pub addresses: Vec<AddressInput>,
}

/// Contact patch. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEmployeeInput {
    /// New email address.
    pub email: Option<String>,
    /// New mobile number.
    pub mobile_number: Option<String>,
    /// New emergency contact number.
    pub emergency_contact: Option<String>,
}

/// Application service for employee records.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    #[must_use]
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Lists every employee.
    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.employees.list().await
    }

    /// Returns one employee or `NotFound`.
    pub async fn get_employee(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee {employee_id} not found")))
    }

    /// Returns the employee with the given code or `NotFound`.
    pub async fn get_employee_by_code(&self, employee_code: &str) -> AppResult<Employee> {
        self.employees
            .find_by_code(employee_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("employee with code '{employee_code}' not found"))
            })
    }

    /// Lists employees whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        self.employees.search_by_name(fragment.trim()).await
    }

    /// Lists the members of an existing department.
    pub async fn list_by_department(
        &self,
        department_id: DepartmentId,
    ) -> AppResult<Vec<Employee>> {
        self.ensure_department_exists(department_id).await?;
        self.employees.list_by_department(department_id).await
    }

    /// Validates and stores a new employee with its addresses.
    pub async fn create_employee(&self, input: CreateEmployeeInput) -> AppResult<Employee> {
        let employee_code = EmployeeCode::new(input.employee_code)?;
        let contact =
            ContactDetails::parse(input.email, input.mobile_number, input.emergency_contact)?;
        let profile = EmployeeProfile::new(
            input.name,
            input.date_of_birth,
            Gender::from_str(&input.gender)?,
            employee_code,
            contact,
            Utc::now().date_naive(),
        )?;
        let addresses = input
            .addresses
            .into_iter()
            .map(AddressInput::into_details)
            .collect::<AppResult<Vec<_>>>()?;

        if self
            .employees
            .find_by_code(profile.employee_code().as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "employee code '{}' is already in use",
                profile.employee_code().as_str()
            )));
        }

        self.employees.create(&profile, &addresses).await
    }

    /// Applies a contact patch and returns the updated employee.
    pub async fn update_employee(
        &self,
        employee_id: EmployeeId,
        input: UpdateEmployeeInput,
    ) -> AppResult<Employee> {
        let patch =
            ContactDetails::parse(input.email, input.mobile_number, input.emergency_contact)?;
        let employee = self.get_employee(employee_id).await?;

        let mut contact = employee.profile().contact().clone();
        contact.apply(patch);
        self.employees.update_contact(employee_id, &contact).await?;

        self.get_employee(employee_id).await
    }

    /// Deletes an employee together with its addresses and memberships.
    pub async fn delete_employee(&self, employee_id: EmployeeId) -> AppResult<()> {
        if !self.employees.delete(employee_id).await? {
            return Err(AppError::NotFound(format!("employee {employee_id} not found")));
        }

        Ok(())
    }

    /// Finds the employee matching the code and date of birth exactly.
    ///
    /// No trimming or case folding is applied to `employee_code`.
    pub async fn verify_employee_credentials(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>> {
        self.employees
            .find_by_code_and_date_of_birth(employee_code, date_of_birth)
            .await
    }

    async fn ensure_department_exists(&self, department_id: DepartmentId) -> AppResult<()> {
        self.departments
            .find_by_id(department_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("department {department_id} not found")))
    }
}

mod addresses;
mod memberships;
