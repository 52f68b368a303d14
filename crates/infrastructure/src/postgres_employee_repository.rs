//! PostgreSQL-backed employees, addresses and department memberships.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use workforce_application::EmployeeRepository;
use workforce_core::{AppError, AppResult};
use workforce_domain::{
    Address, AddressDetails, AddressId, AddressType, ContactDetails, Department, DepartmentId,
    Employee, EmployeeCode, EmployeeId, EmployeeProfile, Gender,
};

use crate::postgres_department_repository::{DEPARTMENT_COLUMNS, DepartmentRow};

const EMPLOYEE_COLUMNS: &str = "employees.id, employees.name, employees.date_of_birth, \
     employees.gender, employees.employee_code, employees.email, employees.mobile_number, \
     employees.emergency_contact, employees.created_at, employees.updated_at";

const ADDRESS_COLUMNS: &str = "addresses.id, addresses.employee_id, addresses.address_type, \
     addresses.street, addresses.city, addresses.state, addresses.country, addresses.postal_code";

/// PostgreSQL implementation of the employee repository port.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    date_of_birth: NaiveDate,
    gender: String,
    employee_code: String,
    email: Option<String>,
    mobile_number: Option<String>,
    emergency_contact: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn into_employee(
        self,
        addresses: Vec<Address>,
        departments: Vec<Department>,
    ) -> AppResult<Employee> {
        let (id, created_at, updated_at) = (self.id, self.created_at, self.updated_at);
        let profile = self
            .into_profile()
            .map_err(|error| stored_row_invalid("employee", id, error))?;

        Ok(Employee::new(
            EmployeeId::new(id),
            profile,
            addresses,
            departments,
            created_at,
            updated_at,
        ))
    }

    fn into_profile(self) -> AppResult<EmployeeProfile> {
        let employee_code = EmployeeCode::new(self.employee_code)?;
        let gender = Gender::from_str(&self.gender)?;
        let contact =
            ContactDetails::parse(self.email, self.mobile_number, self.emergency_contact)?;

        EmployeeProfile::new(
            self.name,
            self.date_of_birth,
            gender,
            employee_code,
            contact,
            Utc::now().date_naive(),
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: i64,
    employee_id: i64,
    address_type: String,
    street: String,
    city: String,
    state: String,
    country: String,
    postal_code: String,
}

impl TryFrom<AddressRow> for Address {
    type Error = AppError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        let details = AddressType::from_str(&row.address_type)
            .and_then(|address_type| {
                AddressDetails::new(
                    address_type,
                    row.street,
                    row.city,
                    row.state,
                    row.country,
                    row.postal_code,
                )
            })
            .map_err(|error| stored_row_invalid("address", row.id, error))?;

        Ok(Address::new(AddressId::new(row.id), details))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    employee_id: i64,
    #[sqlx(flatten)]
    department: DepartmentRow,
}

fn stored_row_invalid(kind: &str, id: i64, error: AppError) -> AppError {
    AppError::Internal(format!("stored {kind} {id} is invalid: {error}"))
}

fn database_error_code(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(database_error) => {
            database_error.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}

mod queries;
mod relations;
mod writes;

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.list_impl().await
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        self.find_by_id_impl(employee_id).await
    }

    async fn find_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        self.find_by_code_impl(employee_code).await
    }

    async fn find_by_code_and_date_of_birth(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>> {
        self.find_by_code_and_date_of_birth_impl(employee_code, date_of_birth)
            .await
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        self.search_by_name_impl(fragment).await
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> AppResult<Vec<Employee>> {
        self.list_by_department_impl(department_id).await
    }

    async fn create(
        &self,
        profile: &EmployeeProfile,
        addresses: &[AddressDetails],
    ) -> AppResult<Employee> {
        self.create_impl(profile, addresses).await
    }

    async fn update_contact(
        &self,
        employee_id: EmployeeId,
        contact: &ContactDetails,
    ) -> AppResult<()> {
        self.update_contact_impl(employee_id, contact).await
    }

    async fn insert_address(
        &self,
        employee_id: EmployeeId,
        details: &AddressDetails,
    ) -> AppResult<Address> {
        self.insert_address_impl(employee_id, details).await
    }

    async fn update_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        details: &AddressDetails,
    ) -> AppResult<()> {
        self.update_address_impl(employee_id, address_id, details)
            .await
    }

    async fn delete_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<()> {
        self.delete_address_impl(employee_id, address_id).await
    }

    async fn add_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        self.add_membership_impl(employee_id, department_id).await
    }

    async fn remove_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        self.remove_membership_impl(employee_id, department_id)
            .await
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        self.delete_impl(employee_id).await
    }
}
