use std::collections::BTreeSet;

use workforce_core::{AppError, AppResult, Principal, Role};
use workforce_domain::Operation;

/// Outcome of a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The caller holds at least one required role.
    Allow,
    /// The caller holds none of the required roles.
    Deny,
}

/// Application service for role-based access checks.
///
/// Roles come from the verified token and are not re-read from storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationService;

impl AuthorizationService {
    /// Creates a new authorization service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Allows when `presented` shares at least one role with `required`.
    #[must_use]
    pub fn authorize(
        &self,
        required: &BTreeSet<Role>,
        presented: &BTreeSet<Role>,
    ) -> AccessDecision {
        if required.intersection(presented).next().is_some() {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        }
    }

    /// Ensures the principal may perform the operation.
    pub fn require(&self, principal: &Principal, operation: Operation) -> AppResult<()> {
        match self.authorize(&operation.required_roles(), principal.roles()) {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny => Err(AppError::Forbidden(format!(
                "subject '{}' may not perform '{}'",
                principal.subject_name(),
                operation.as_str()
            ))),
        }
    }
}

#[cfg(test)]
mod tests;
