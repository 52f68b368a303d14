//! PostgreSQL-backed departments.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use workforce_application::DepartmentRepository;
use workforce_core::{AppError, AppResult};
use workforce_domain::{Department, DepartmentDetails, DepartmentId, DepartmentType};

pub(crate) const DEPARTMENT_COLUMNS: &str = "departments.id, departments.department_name, \
     departments.description, departments.department_type, departments.responsibilities, \
     departments.created_at, departments.updated_at";

/// PostgreSQL implementation of the department repository port.
#[derive(Clone)]
pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DepartmentRow {
    id: i64,
    department_name: String,
    description: String,
    department_type: String,
    responsibilities: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DepartmentRow> for Department {
    type Error = AppError;

    fn try_from(row: DepartmentRow) -> Result<Self, Self::Error> {
        let details = DepartmentType::from_str(&row.department_type)
            .and_then(|department_type| {
                DepartmentDetails::new(
                    row.department_name,
                    row.description,
                    department_type,
                    row.responsibilities,
                )
            })
            .map_err(|error| {
                AppError::Internal(format!("stored department {} is invalid: {error}", row.id))
            })?;

        Ok(Department::new(
            DepartmentId::new(row.id),
            details,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn list(&self) -> AppResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments ORDER BY departments.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list departments: {error}")))?;

        rows.into_iter().map(Department::try_from).collect()
    }

    async fn find_by_id(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE departments.id = $1"
        ))
        .bind(department_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find department: {error}")))?;

        row.map(Department::try_from).transpose()
    }

    async fn create(&self, details: &DepartmentDetails) -> AppResult<Department> {
        let row = sqlx::query_as::<_, DepartmentRow>(&format!(
            r#"
            INSERT INTO departments
                (department_name, description, department_type, responsibilities)
            VALUES ($1, $2, $3, $4)
            RETURNING {DEPARTMENT_COLUMNS}
            "#
        ))
        .bind(details.name())
        .bind(details.description())
        .bind(details.department_type().as_str())
        .bind(details.responsibilities())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| name_conflict_or_internal(error, details.name(), "create department"))?;

        Department::try_from(row)
    }

    async fn update(
        &self,
        department_id: DepartmentId,
        details: &DepartmentDetails,
    ) -> AppResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(&format!(
            r#"
            UPDATE departments
            SET department_name = $2,
                description = $3,
                department_type = $4,
                responsibilities = $5,
                updated_at = now()
            WHERE departments.id = $1
            RETURNING {DEPARTMENT_COLUMNS}
            "#
        ))
        .bind(department_id.as_i64())
        .bind(details.name())
        .bind(details.description())
        .bind(details.department_type().as_str())
        .bind(details.responsibilities())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| name_conflict_or_internal(error, details.name(), "update department"))?;

        row.map(Department::try_from).transpose()
    }

    async fn delete(&self, department_id: DepartmentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(department_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete department: {error}"))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn name_conflict_or_internal(error: sqlx::Error, name: &str, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(format!("department '{name}' already exists"));
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
