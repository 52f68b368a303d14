use super::*;

impl PostgresEmployeeRepository {
    pub(super) async fn create_impl(
        &self,
        profile: &EmployeeProfile,
        addresses: &[AddressDetails],
    ) -> AppResult<Employee> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to begin transaction: {error}"))
        })?;

        let contact = profile.contact();
        let employee_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employees (
                name, date_of_birth, gender, employee_code,
                email, mobile_number, emergency_contact
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(profile.name())
        .bind(profile.date_of_birth())
        .bind(profile.gender().as_str())
        .bind(profile.employee_code().as_str())
        .bind(contact.email.as_ref().map(|email| email.as_str()))
        .bind(contact.mobile_number.as_ref().map(|number| number.as_str()))
        .bind(contact.emergency_contact.as_ref().map(|number| number.as_str()))
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| {
            if database_error_code(&error).as_deref() == Some("23505") {
                return AppError::Conflict(format!(
                    "employee code '{}' is already in use",
                    profile.employee_code().as_str()
                ));
            }
            AppError::Internal(format!("failed to create employee: {error}"))
        })?;

        for details in addresses {
            sqlx::query(
                r#"
                INSERT INTO addresses (
                    employee_id, address_type, street, city, state, country, postal_code
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(employee_id)
            .bind(details.address_type().as_str())
            .bind(details.street())
            .bind(details.city())
            .bind(details.state())
            .bind(details.country())
            .bind(details.postal_code())
            .execute(&mut *transaction)
            .await
            .map_err(|error| AppError::Internal(format!("failed to store address: {error}")))?;
        }

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        self.find_by_id_impl(EmployeeId::new(employee_id))
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("employee {employee_id} vanished after insert"))
            })
    }

    pub(super) async fn update_contact_impl(
        &self,
        employee_id: EmployeeId,
        contact: &ContactDetails,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET email = $2,
                mobile_number = $3,
                emergency_contact = $4,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(contact.email.as_ref().map(|email| email.as_str()))
        .bind(contact.mobile_number.as_ref().map(|number| number.as_str()))
        .bind(contact.emergency_contact.as_ref().map(|number| number.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update employee: {error}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "employee {employee_id} not found"
            )));
        }

        Ok(())
    }

    pub(super) async fn delete_impl(&self, employee_id: EmployeeId) -> AppResult<bool> {
        // Addresses and memberships cascade.
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(employee_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete employee: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}
