//! Login flows for administrators and employees.
//!
//! Both flows end in a signed bearer token. Failures never reveal whether
//! the account or employee code exists.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use workforce_core::{AppError, AppResult, Principal, Role};

use crate::{AdminUserRepository, EmployeeService, IssuedToken, PasswordHasher, TokenIssuer};

/// Token and subject details returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    /// Signed bearer token.
    pub token: IssuedToken,
    /// Account id for administrators, absent for employees.
    pub subject_id: Option<i64>,
    /// Username or employee code.
    pub subject_name: String,
    /// Roles embedded in the token.
    pub roles: BTreeSet<Role>,
}

/// Application service for authentication.
#[derive(Clone)]
pub struct AuthService {
    admin_users: Arc<dyn AdminUserRepository>,
    employee_service: EmployeeService,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new auth service.
    #[must_use]
    pub fn new(
        admin_users: Arc<dyn AdminUserRepository>,
        employee_service: EmployeeService,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            admin_users,
            employee_service,
            password_hasher,
            token_issuer,
            token_ttl,
        }
    }

    /// Authenticates an administrator by username and password.
    pub async fn authenticate_admin(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<LoginGrant> {
        let Some(user) = self.admin_users.find_by_username(username).await? else {
            // Hash anyway so response time does not reveal unknown usernames.
            let _ = self.password_hasher.hash_password(password);
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)?
        {
            return Err(AppError::InvalidCredentials);
        }

        let subject_id = Some(user.id.as_i64());
        let token = self
            .token_issuer
            .issue(subject_id, &user.username, &user.roles, self.token_ttl)?;

        Ok(LoginGrant {
            token,
            subject_id,
            subject_name: user.username,
            roles: user.roles,
        })
    }

    /// Authenticates an employee by exact employee code and date of birth.
    pub async fn authenticate_employee(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<LoginGrant> {
        let employee = self
            .employee_service
            .verify_employee_credentials(employee_code, date_of_birth)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let subject_name = employee.profile().employee_code().as_str().to_owned();
        let roles = BTreeSet::from([Role::Employee]);
        let token = self
            .token_issuer
            .issue(None, &subject_name, &roles, self.token_ttl)?;

        Ok(LoginGrant {
            token,
            subject_id: None,
            subject_name,
            roles,
        })
    }

    /// Verifies a bearer token and returns its principal.
    pub fn verify_token(&self, token: &str) -> AppResult<Principal> {
        self.token_issuer.verify(token)
    }
}
