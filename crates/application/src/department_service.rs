use std::str::FromStr;
use std::sync::Arc;

use workforce_core::{AppError, AppResult};
use workforce_domain::{
    Department, DepartmentDetails, DepartmentId, DepartmentType, EmployeeSummary,
};

use crate::{DepartmentRepository, EmployeeRepository};

/// Input payload for department creation and replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentInput {
    /// Unique department name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Department type storage value, e.g. `TECHNICAL`.
    pub department_type: String,
    /// Optional responsibilities text.
    pub responsibilities: Option<String>,
}

impl DepartmentInput {
    fn into_details(self) -> AppResult<DepartmentDetails> {
        DepartmentDetails::new(
            self.name,
            self.description,
            DepartmentType::from_str(&self.department_type)?,
            self.responsibilities,
        )
    }
}

/// Department together with summaries of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRoster {
    /// The department.
    pub department: Department,
    /// Members ordered by employee id.
    pub employees: Vec<EmployeeSummary>,
}

/// Application service for departments.
#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl DepartmentService {
    /// Creates a new department service.
    #[must_use]
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Lists every department.
    pub async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.departments.list().await
    }

    /// Returns one department or `NotFound`.
    pub async fn get_department(&self, department_id: DepartmentId) -> AppResult<Department> {
        self.departments
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| not_found(department_id))
    }

    /// Returns a department with its member summaries.
    pub async fn get_department_with_employees(
        &self,
        department_id: DepartmentId,
    ) -> AppResult<DepartmentRoster> {
        let department = self.get_department(department_id).await?;
        let employees = self
            .employees
            .list_by_department(department_id)
            .await?
            .iter()
            .map(|employee| employee.summary())
            .collect();

        Ok(DepartmentRoster {
            department,
            employees,
        })
    }

    /// Validates and stores a new department.
    pub async fn create_department(&self, input: DepartmentInput) -> AppResult<Department> {
        let details = input.into_details()?;
        self.departments.create(&details).await
    }

    /// Replaces the fields of an existing department.
    pub async fn update_department(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> AppResult<Department> {
        let details = input.into_details()?;
        self.departments
            .update(department_id, &details)
            .await?
            .ok_or_else(|| not_found(department_id))
    }

    /// Deletes a department and drops its memberships.
    pub async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()> {
        if !self.departments.delete(department_id).await? {
            return Err(not_found(department_id));
        }

        Ok(())
    }
}

fn not_found(department_id: DepartmentId) -> AppError {
    AppError::NotFound(format!("department {department_id} not found"))
}
