use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use workforce_application::{AdminUserRecord, AdminUserRepository};
use workforce_core::{AppError, AppResult, Role};
use workforce_domain::{AdminUserId, Department, Employee, EmployeeId, Username};

mod directory;

#[derive(Debug, Default)]
struct AdminState {
    roles: BTreeSet<Role>,
    users: BTreeMap<i64, AdminUserRecord>,
    next_id: i64,
}

#[derive(Debug, Default)]
struct DirectoryState {
    employees: BTreeMap<i64, Employee>,
    departments: BTreeMap<i64, Department>,
    next_employee_id: i64,
    next_address_id: i64,
    next_department_id: i64,
}

impl DirectoryState {
    fn employee_mut(&mut self, employee_id: EmployeeId) -> AppResult<&mut Employee> {
        self.employees
            .get_mut(&employee_id.as_i64())
            .ok_or_else(|| AppError::NotFound(format!("employee {employee_id} not found")))
    }
}

/// In-memory adapter for admin accounts, employees and departments.
///
/// Enforces the same uniqueness and cascade rules as the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    admin_users: RwLock<AdminState>,
    directory: RwLock<DirectoryState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryStore {
    async fn ensure_roles(&self, roles: &[Role]) -> AppResult<()> {
        self.admin_users
            .write()
            .await
            .roles
            .extend(roles.iter().copied());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUserRecord>> {
        Ok(self
            .admin_users
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn any_with_role(&self, role: Role) -> AppResult<bool> {
        Ok(self
            .admin_users
            .read()
            .await
            .users
            .values()
            .any(|user| user.roles.contains(&role)))
    }

    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        roles: &BTreeSet<Role>,
    ) -> AppResult<AdminUserId> {
        let mut state = self.admin_users.write().await;

        if state
            .users
            .values()
            .any(|user| user.username == username.as_str())
        {
            return Err(AppError::Conflict(format!(
                "username '{}' is already taken",
                username.as_str()
            )));
        }

        if let Some(missing) = roles.iter().find(|role| !state.roles.contains(role)) {
            return Err(AppError::Internal(format!(
                "role '{missing}' has not been seeded"
            )));
        }

        state.next_id += 1;
        let id = AdminUserId::new(state.next_id);
        state.users.insert(
            id.as_i64(),
            AdminUserRecord {
                id,
                username: username.as_str().to_owned(),
                password_hash: password_hash.to_owned(),
                roles: roles.clone(),
            },
        );

        Ok(id)
    }
}
