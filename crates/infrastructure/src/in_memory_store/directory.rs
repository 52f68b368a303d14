use chrono::{NaiveDate, Utc};
use workforce_application::{DepartmentRepository, EmployeeRepository};
use workforce_domain::{
    Address, AddressDetails, AddressId, ContactDetails, DepartmentDetails, DepartmentId,
    EmployeeProfile,
};

use super::*;

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.directory.read().await.employees.values().cloned().collect())
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self
            .directory
            .read()
            .await
            .employees
            .get(&employee_id.as_i64())
            .cloned())
    }

    async fn find_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .directory
            .read()
            .await
            .employees
            .values()
            .find(|employee| employee.profile().employee_code().as_str() == employee_code)
            .cloned())
    }

    async fn find_by_code_and_date_of_birth(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>> {
        Ok(self.find_by_code(employee_code).await?.filter(|employee| {
            employee.profile().date_of_birth() == date_of_birth
        }))
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        let needle = fragment.to_lowercase();

        Ok(self
            .directory
            .read()
            .await
            .employees
            .values()
            .filter(|employee| employee.profile().name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> AppResult<Vec<Employee>> {
        Ok(self
            .directory
            .read()
            .await
            .employees
            .values()
            .filter(|employee| employee.belongs_to(department_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        profile: &EmployeeProfile,
        addresses: &[AddressDetails],
    ) -> AppResult<Employee> {
        let mut state = self.directory.write().await;
        let code = profile.employee_code().as_str();

        if state
            .employees
            .values()
            .any(|employee| employee.profile().employee_code().as_str() == code)
        {
            return Err(AppError::Conflict(format!(
                "employee code '{code}' is already in use"
            )));
        }

        let mut owned = Vec::with_capacity(addresses.len());
        for details in addresses {
            state.next_address_id += 1;
            owned.push(Address::new(
                AddressId::new(state.next_address_id),
                details.clone(),
            ));
        }

        state.next_employee_id += 1;
        let now = Utc::now();
        let employee = Employee::new(
            EmployeeId::new(state.next_employee_id),
            profile.clone(),
            owned,
            Vec::new(),
            now,
            now,
        );
        state
            .employees
            .insert(employee.id().as_i64(), employee.clone());

        Ok(employee)
    }

    async fn update_contact(
        &self,
        employee_id: EmployeeId,
        contact: &ContactDetails,
    ) -> AppResult<()> {
        self.directory
            .write()
            .await
            .employee_mut(employee_id)?
            .update_contact(contact.clone(), Utc::now());
        Ok(())
    }

    async fn insert_address(
        &self,
        employee_id: EmployeeId,
        details: &AddressDetails,
    ) -> AppResult<Address> {
        let mut state = self.directory.write().await;
        state.employee_mut(employee_id)?;

        state.next_address_id += 1;
        let address = Address::new(AddressId::new(state.next_address_id), details.clone());
        state
            .employee_mut(employee_id)?
            .add_address(address.clone());

        Ok(address)
    }

    async fn update_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        details: &AddressDetails,
    ) -> AppResult<()> {
        self.directory
            .write()
            .await
            .employee_mut(employee_id)?
            .update_address(address_id, details.clone())
    }

    async fn delete_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<()> {
        self.directory
            .write()
            .await
            .employee_mut(employee_id)?
            .remove_address(address_id)
            .map(|_| ())
    }

    async fn add_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        let mut state = self.directory.write().await;
        let department = state
            .departments
            .get(&department_id.as_i64())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("department {department_id} not found")))?;

        state
            .employee_mut(employee_id)?
            .join_department(department);
        Ok(())
    }

    async fn remove_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        self.directory
            .write()
            .await
            .employee_mut(employee_id)?
            .leave_department(department_id);
        Ok(())
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self
            .directory
            .write()
            .await
            .employees
            .remove(&employee_id.as_i64())
            .is_some())
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Department>> {
        Ok(self
            .directory
            .read()
            .await
            .departments
            .values()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        Ok(self
            .directory
            .read()
            .await
            .departments
            .get(&department_id.as_i64())
            .cloned())
    }

    async fn create(&self, details: &DepartmentDetails) -> AppResult<Department> {
        let mut state = self.directory.write().await;
        ensure_unique_name(&state, None, details.name())?;

        state.next_department_id += 1;
        let now = Utc::now();
        let department = Department::new(
            DepartmentId::new(state.next_department_id),
            details.clone(),
            now,
            now,
        );
        state
            .departments
            .insert(department.id().as_i64(), department.clone());

        Ok(department)
    }

    async fn update(
        &self,
        department_id: DepartmentId,
        details: &DepartmentDetails,
    ) -> AppResult<Option<Department>> {
        let mut state = self.directory.write().await;
        let Some(created_at) = state
            .departments
            .get(&department_id.as_i64())
            .map(Department::created_at)
        else {
            return Ok(None);
        };
        ensure_unique_name(&state, Some(department_id), details.name())?;

        let updated = Department::new(department_id, details.clone(), created_at, Utc::now());
        state
            .departments
            .insert(department_id.as_i64(), updated.clone());
        for employee in state.employees.values_mut() {
            employee.refresh_department(&updated);
        }

        Ok(Some(updated))
    }

    async fn delete(&self, department_id: DepartmentId) -> AppResult<bool> {
        let mut state = self.directory.write().await;
        if state.departments.remove(&department_id.as_i64()).is_none() {
            return Ok(false);
        }

        // Memberships cascade; the employee rows themselves stay.
        for employee in state.employees.values_mut() {
            employee.leave_department(department_id);
        }

        Ok(true)
    }
}

fn ensure_unique_name(
    state: &DirectoryState,
    except: Option<DepartmentId>,
    name: &str,
) -> AppResult<()> {
    let taken = state.departments.values().any(|department| {
        Some(department.id()) != except && department.details().name() == name
    });

    if taken {
        return Err(AppError::Conflict(format!(
            "department name '{name}' is already taken"
        )));
    }

    Ok(())
}
