use super::*;

impl EmployeeService {
    /// Makes the employee a member of the department. Assigning an existing
    /// member again changes nothing.
    pub async fn assign_department(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<Employee> {
        let employee = self.get_employee(employee_id).await?;
        self.ensure_department_exists(department_id).await?;

        if employee.belongs_to(department_id) {
            return Ok(employee);
        }

        self.employees
            .add_membership(employee_id, department_id)
            .await?;
        self.get_employee(employee_id).await
    }

    /// Removes the employee from the department. Removing a non-member
    /// changes nothing.
    pub async fn remove_department(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<Employee> {
        let employee = self.get_employee(employee_id).await?;
        self.ensure_department_exists(department_id).await?;

        if !employee.belongs_to(department_id) {
            return Ok(employee);
        }

        self.employees
            .remove_membership(employee_id, department_id)
            .await?;
        self.get_employee(employee_id).await
    }
}
