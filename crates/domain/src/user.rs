//! Administrator account types.

use serde::{Deserialize, Serialize};
use workforce_core::{AppError, AppResult};

/// Maximum username length accepted at login and persisted in storage.
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Login name of an administrator account.
///
/// Compared byte-for-byte at login; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(AppError::Validation("username is required".to_owned()));
        }

        if value.chars().count() > USERNAME_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "username must not exceed {USERNAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_rejected() {
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn username_keeps_original_case() {
        let username = Username::new("Admin");
        assert!(matches!(username, Ok(ref value) if value.as_str() == "Admin"));
    }

    #[test]
    fn overlong_username_is_rejected() {
        assert!(Username::new("a".repeat(USERNAME_MAX_LENGTH + 1)).is_err());
    }
}
