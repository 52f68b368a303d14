use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use workforce_core::{AppResult, Principal, Role};
use workforce_domain::{AdminUserId, Username};

/// Administrator account returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUserRecord {
    /// Unique account identifier.
    pub id: AdminUserId,
    /// Login name.
    pub username: String,
    /// Argon2id PHC hash string.
    pub password_hash: String,
    /// Roles assigned to the account.
    pub roles: BTreeSet<Role>,
}

/// Repository port for administrator accounts and the role lookup table.
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Inserts a role row for every given role that is not yet stored.
    async fn ensure_roles(&self, roles: &[Role]) -> AppResult<()>;

    /// Finds an account by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUserRecord>>;

    /// Returns whether any account holds the role.
    async fn any_with_role(&self, role: Role) -> AppResult<bool>;

    /// Creates an account with the given roles. Duplicate usernames fail
    /// with `Conflict`.
    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        roles: &BTreeSet<Role>,
    ) -> AppResult<AdminUserId>;
}

/// Port for password hashing operations.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Signed bearer token with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact serialized token.
    pub token: String,
    /// Instant after which the token is rejected.
    pub expires_at: DateTime<Utc>,
}

/// Port for issuing and verifying bearer tokens.
pub trait TokenIssuer: Send + Sync {
    /// Signs a token for the subject, valid for `ttl`.
    fn issue(
        &self,
        subject_id: Option<i64>,
        subject_name: &str,
        roles: &BTreeSet<Role>,
        ttl: Duration,
    ) -> AppResult<IssuedToken>;

    /// Verifies signature and expiry and reconstructs the principal.
    ///
    /// Fails with `TokenExpired` for an expired token and `Unauthenticated`
    /// for anything else that does not verify.
    fn verify(&self, token: &str) -> AppResult<Principal>;
}
