use super::*;

impl PostgresEmployeeRepository {
    pub(super) async fn insert_address_impl(
        &self,
        employee_id: EmployeeId,
        details: &AddressDetails,
    ) -> AppResult<Address> {
        let row = sqlx::query_as::<_, AddressRow>(&format!(
            r#"
            INSERT INTO addresses (
                employee_id, address_type, street, city, state, country, postal_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(employee_id.as_i64())
        .bind(details.address_type().as_str())
        .bind(details.street())
        .bind(details.city())
        .bind(details.state())
        .bind(details.country())
        .bind(details.postal_code())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| missing_employee_or_internal(error, employee_id, "add address"))?;

        Address::try_from(row)
    }

    pub(super) async fn update_address_impl(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        details: &AddressDetails,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET address_type = $3,
                street = $4,
                city = $5,
                state = $6,
                country = $7,
                postal_code = $8
            WHERE id = $1 AND employee_id = $2
            "#,
        )
        .bind(address_id.as_i64())
        .bind(employee_id.as_i64())
        .bind(details.address_type().as_str())
        .bind(details.street())
        .bind(details.city())
        .bind(details.state())
        .bind(details.country())
        .bind(details.postal_code())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update address: {error}")))?;

        ensure_owned_address(result.rows_affected(), employee_id, address_id)
    }

    pub(super) async fn delete_address_impl(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1 AND employee_id = $2")
            .bind(address_id.as_i64())
            .bind(employee_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete address: {error}")))?;

        ensure_owned_address(result.rows_affected(), employee_id, address_id)
    }

    pub(super) async fn add_membership_impl(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employee_departments (employee_id, department_id)
            VALUES ($1, $2)
            ON CONFLICT (employee_id, department_id) DO NOTHING
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(department_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if database_error_code(&error).as_deref() == Some("23503") {
                return AppError::NotFound(format!(
                    "employee {employee_id} or department {department_id} not found"
                ));
            }
            AppError::Internal(format!("failed to assign department: {error}"))
        })?;

        Ok(())
    }

    pub(super) async fn remove_membership_impl(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        sqlx::query(
            "DELETE FROM employee_departments WHERE employee_id = $1 AND department_id = $2",
        )
        .bind(employee_id.as_i64())
        .bind(department_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to remove department membership: {error}"))
        })?;

        Ok(())
    }
}

fn ensure_owned_address(
    rows_affected: u64,
    employee_id: EmployeeId,
    address_id: AddressId,
) -> AppResult<()> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "address {address_id} not found for employee {employee_id}"
        )));
    }

    Ok(())
}

fn missing_employee_or_internal(
    error: sqlx::Error,
    employee_id: EmployeeId,
    operation: &str,
) -> AppError {
    // 23503: foreign key violation.
    if database_error_code(&error).as_deref() == Some("23503") {
        return AppError::NotFound(format!("employee {employee_id} not found"));
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
