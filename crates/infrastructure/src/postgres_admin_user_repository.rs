//! PostgreSQL-backed administrator accounts and role lookup table.

use std::collections::BTreeSet;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::PgPool;
use workforce_application::{AdminUserRecord, AdminUserRepository};
use workforce_core::{AppError, AppResult, Role};
use workforce_domain::{AdminUserId, Username};

/// PostgreSQL implementation of the admin user repository port.
#[derive(Clone)]
pub struct PostgresAdminUserRepository {
    pool: PgPool,
}

impl PostgresAdminUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: i64,
    username: String,
    password_hash: String,
    roles: Vec<String>,
}

impl TryFrom<AdminUserRow> for AdminUserRecord {
    type Error = AppError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let roles = row
            .roles
            .iter()
            .map(|authority| Role::from_str(authority))
            .collect::<AppResult<BTreeSet<_>>>()
            .map_err(|error| {
                AppError::Internal(format!(
                    "admin user '{}' has invalid role: {error}",
                    row.username
                ))
            })?;

        Ok(Self {
            id: AdminUserId::new(row.id),
            username: row.username,
            password_hash: row.password_hash,
            roles,
        })
    }
}

fn authorities<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Vec<String> {
    roles
        .into_iter()
        .map(|role| role.authority().to_owned())
        .collect()
}

#[async_trait]
impl AdminUserRepository for PostgresAdminUserRepository {
    async fn ensure_roles(&self, roles: &[Role]) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO roles (authority)
            SELECT UNNEST($1::TEXT[])
            ON CONFLICT (authority) DO NOTHING
            "#,
        )
        .bind(authorities(roles))
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to seed roles: {error}")))?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUserRecord>> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT
                users.id,
                users.username,
                users.password_hash,
                COALESCE(
                    ARRAY_AGG(roles.authority ORDER BY roles.authority)
                        FILTER (WHERE roles.authority IS NOT NULL),
                    '{}'
                ) AS roles
            FROM admin_users AS users
            LEFT JOIN admin_user_roles AS assignments
                ON assignments.admin_user_id = users.id
            LEFT JOIN roles
                ON roles.id = assignments.role_id
            WHERE users.username = $1
            GROUP BY users.id
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find admin user: {error}")))?;

        row.map(AdminUserRecord::try_from).transpose()
    }

    async fn any_with_role(&self, role: Role) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM admin_user_roles AS assignments
                JOIN roles ON roles.id = assignments.role_id
                WHERE roles.authority = $1
            )
            "#,
        )
        .bind(role.authority())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to check role holders: {error}")))
    }

    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        roles: &BTreeSet<Role>,
    ) -> AppResult<AdminUserId> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to begin transaction: {error}"))
        })?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| username_conflict_or_internal(error, username.as_str()))?;

        let assigned = sqlx::query(
            r#"
            INSERT INTO admin_user_roles (admin_user_id, role_id)
            SELECT $1, roles.id
            FROM roles
            WHERE roles.authority = ANY($2)
            "#,
        )
        .bind(id)
        .bind(authorities(roles))
        .execute(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to assign roles: {error}")))?
        .rows_affected();

        if usize::try_from(assigned).ok() != Some(roles.len()) {
            return Err(AppError::Internal(
                "role rows are missing; seed roles before creating users".to_owned(),
            ));
        }

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok(AdminUserId::new(id))
    }
}

fn username_conflict_or_internal(error: sqlx::Error, username: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(format!("admin user '{username}' already exists"));
    }

    AppError::Internal(format!("failed to create admin user: {error}"))
}
