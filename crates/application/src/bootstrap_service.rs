use std::collections::BTreeSet;
use std::sync::Arc;

use workforce_core::{AppError, AppResult, Role};
use workforce_domain::Username;

use crate::{AdminUserRepository, PasswordHasher};

/// Username of the account created on an empty database.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Development password of the default administrator.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

/// What a bootstrap run changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Whether the default administrator was created by this run.
    pub default_admin_created: bool,
}

/// Seeds roles and the default administrator at startup.
#[derive(Clone)]
pub struct BootstrapService {
    admin_users: Arc<dyn AdminUserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    seed_default_admin: bool,
}

impl BootstrapService {
    /// Creates a bootstrap service. Role rows are always seeded; the default
    /// administrator only when `seed_default_admin` is set.
    #[must_use]
    pub fn new(
        admin_users: Arc<dyn AdminUserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        seed_default_admin: bool,
    ) -> Self {
        Self {
            admin_users,
            password_hasher,
            seed_default_admin,
        }
    }

    /// Runs the seeding steps. Safe to call on every start.
    pub async fn run(&self) -> AppResult<BootstrapReport> {
        self.admin_users.ensure_roles(Role::all()).await?;

        if !self.seed_default_admin || self.admin_users.any_with_role(Role::Admin).await? {
            return Ok(BootstrapReport {
                default_admin_created: false,
            });
        }

        let username = Username::new(DEFAULT_ADMIN_USERNAME)?;
        let password_hash = self.password_hasher.hash_password(DEFAULT_ADMIN_PASSWORD)?;
        let roles = BTreeSet::from([Role::Admin]);

        let default_admin_created = match self
            .admin_users
            .create(&username, &password_hash, &roles)
            .await
        {
            Ok(_) => true,
            // Another instance may have created it first.
            Err(AppError::Conflict(_)) => {
                if !self.admin_users.any_with_role(Role::Admin).await? {
                    return Err(AppError::Internal(format!(
                        "username '{DEFAULT_ADMIN_USERNAME}' is taken by a non-admin account"
                    )));
                }
                false
            }
            Err(error) => return Err(error),
        };

        Ok(BootstrapReport {
            default_admin_created,
        })
    }
}
