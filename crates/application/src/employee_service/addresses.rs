use workforce_domain::AddressId;

use super::*;

impl EmployeeService {
    /// Adds an address to an employee.
    pub async fn add_address(
        &self,
        employee_id: EmployeeId,
        input: AddressInput,
    ) -> AppResult<Employee> {
        let details = input.into_details()?;
        self.get_employee(employee_id).await?;

        self.employees.insert_address(employee_id, &details).await?;
        self.get_employee(employee_id).await
    }

    /// Replaces the fields of an address the employee owns.
    pub async fn update_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        input: AddressInput,
    ) -> AppResult<Employee> {
        let details = input.into_details()?;
        let employee = self.get_employee(employee_id).await?;
        employee.address(address_id)?;

        self.employees
            .update_address(employee_id, address_id, &details)
            .await?;
        self.get_employee(employee_id).await
    }

    /// Removes an address the employee owns.
    pub async fn remove_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<Employee> {
        let employee = self.get_employee(employee_id).await?;
        employee.address(address_id)?;

        self.employees
            .delete_address(employee_id, address_id)
            .await?;
        self.get_employee(employee_id).await
    }
}
