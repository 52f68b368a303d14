//! Shared primitives for all Rust crates in the workforce service.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{Principal, Role};

/// Result type used across workforce crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Creates a validated non-empty string no longer than `max_chars`.
    pub fn with_max_length(
        field: &str,
        value: impl Into<String>,
        max_chars: usize,
    ) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be blank")));
        }

        if value.chars().count() > max_chars {
            return Err(AppError::Validation(format!(
                "{field} must not exceed {max_chars} characters"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Login attempt did not match a known principal.
    ///
    /// Carries no detail so callers cannot tell an unknown account from a
    /// wrong secret.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Request carries no bearer token or the token cannot be verified.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Bearer token signature is valid but its expiry has passed.
    #[error("token expired")]
    TokenExpired,

    /// Principal is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
