use std::collections::HashMap;

use super::*;

impl PostgresEmployeeRepository {
    pub(super) async fn list_impl(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY employees.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list employees: {error}")))?;

        self.hydrate(rows).await
    }

    pub(super) async fn find_by_id_impl(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employees.id = $1"
        ))
        .bind(employee_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find employee: {error}")))?;

        self.hydrate_one(row).await
    }

    pub(super) async fn find_by_code_impl(
        &self,
        employee_code: &str,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employees.employee_code = $1"
        ))
        .bind(employee_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find employee by code: {error}"))
        })?;

        self.hydrate_one(row).await
    }

    pub(super) async fn find_by_code_and_date_of_birth_impl(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE employees.employee_code = $1
              AND employees.date_of_birth = $2
            "#
        ))
        .bind(employee_code)
        .bind(date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to look up employee credentials: {error}"))
        })?;

        self.hydrate_one(row).await
    }

    pub(super) async fn search_by_name_impl(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE POSITION(LOWER($1) IN LOWER(employees.name)) > 0
            ORDER BY employees.id
            "#
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to search employees: {error}")))?;

        self.hydrate(rows).await
    }

    pub(super) async fn list_by_department_impl(
        &self,
        department_id: DepartmentId,
    ) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            JOIN employee_departments AS memberships
                ON memberships.employee_id = employees.id
            WHERE memberships.department_id = $1
            ORDER BY employees.id
            "#
        ))
        .bind(department_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list department members: {error}"))
        })?;

        self.hydrate(rows).await
    }

    async fn hydrate_one(&self, row: Option<EmployeeRow>) -> AppResult<Option<Employee>> {
        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    /// Loads addresses and departments for the rows with two batched queries.
    async fn hydrate(&self, rows: Vec<EmployeeRow>) -> AppResult<Vec<Employee>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let employee_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let address_rows = sqlx::query_as::<_, AddressRow>(&format!(
            r#"
            SELECT {ADDRESS_COLUMNS}
            FROM addresses
            WHERE addresses.employee_id = ANY($1)
            ORDER BY addresses.id
            "#
        ))
        .bind(employee_ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load addresses: {error}")))?;

        let membership_rows = sqlx::query_as::<_, MembershipRow>(&format!(
            r#"
            SELECT memberships.employee_id, {DEPARTMENT_COLUMNS}
            FROM employee_departments AS memberships
            JOIN departments ON departments.id = memberships.department_id
            WHERE memberships.employee_id = ANY($1)
            ORDER BY departments.id
            "#
        ))
        .bind(employee_ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load memberships: {error}")))?;

        let mut addresses: HashMap<i64, Vec<Address>> = HashMap::new();
        for row in address_rows {
            let employee_id = row.employee_id;
            addresses
                .entry(employee_id)
                .or_default()
                .push(Address::try_from(row)?);
        }

        let mut departments: HashMap<i64, Vec<Department>> = HashMap::new();
        for row in membership_rows {
            departments
                .entry(row.employee_id)
                .or_default()
                .push(Department::try_from(row.department)?);
        }

        rows.into_iter()
            .map(|row| {
                let owned_addresses = addresses.remove(&row.id).unwrap_or_default();
                let memberships = departments.remove(&row.id).unwrap_or_default();
                row.into_employee(owned_addresses, memberships)
            })
            .collect()
    }
}
