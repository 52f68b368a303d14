use async_trait::async_trait;
use chrono::NaiveDate;
use workforce_core::AppResult;
use workforce_domain::{
    Address, AddressDetails, AddressId, ContactDetails, Department, DepartmentDetails,
    DepartmentId, Employee, EmployeeId, EmployeeProfile,
};

/// Repository port for employees and the relationships they own.
///
/// Implementations load each employee together with its addresses and
/// departments.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists all employees ordered by id.
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Finds an employee by id.
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Finds an employee by exact employee code.
    async fn find_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>>;

    /// Finds an employee matching both code and date of birth exactly.
    async fn find_by_code_and_date_of_birth(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>>;

    /// Lists employees whose name contains the fragment, ignoring case.
    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>>;

    /// Lists members of a department.
    async fn list_by_department(&self, department_id: DepartmentId) -> AppResult<Vec<Employee>>;

    /// Stores an employee and its initial addresses atomically. A duplicate
    /// employee code fails with `Conflict`.
    async fn create(
        &self,
        profile: &EmployeeProfile,
        addresses: &[AddressDetails],
    ) -> AppResult<Employee>;

    /// Overwrites the contact channels of an employee.
    async fn update_contact(
        &self,
        employee_id: EmployeeId,
        contact: &ContactDetails,
    ) -> AppResult<()>;

    /// Stores a new address for an employee.
    async fn insert_address(
        &self,
        employee_id: EmployeeId,
        details: &AddressDetails,
    ) -> AppResult<Address>;

    /// Replaces the fields of an address owned by the employee.
    async fn update_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        details: &AddressDetails,
    ) -> AppResult<()>;

    /// Deletes an address owned by the employee.
    async fn delete_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<()>;

    /// Records department membership. Existing memberships are left as is.
    async fn add_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()>;

    /// Removes department membership if present.
    async fn remove_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()>;

    /// Deletes an employee with its addresses and memberships. Returns
    /// false when no such employee exists.
    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool>;
}

/// Repository port for departments.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Lists all departments ordered by id.
    async fn list(&self) -> AppResult<Vec<Department>>;

    /// Finds a department by id.
    async fn find_by_id(&self, department_id: DepartmentId) -> AppResult<Option<Department>>;

    /// Stores a department. A duplicate name fails with `Conflict`.
    async fn create(&self, details: &DepartmentDetails) -> AppResult<Department>;

    /// Replaces department fields. A name taken by another department
    /// fails with `Conflict`; a missing department yields `None`.
    async fn update(
        &self,
        department_id: DepartmentId,
        details: &DepartmentDetails,
    ) -> AppResult<Option<Department>>;

    /// Deletes a department and its memberships. Returns false when no such
    /// department exists.
    async fn delete(&self, department_id: DepartmentId) -> AppResult<bool>;
}
