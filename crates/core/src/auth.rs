use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Roles recognised by the authorization gate.
///
/// The set is fixed at compile time. Storage only ever holds the authority
/// string returned by [`Role::authority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Role {
    /// Back-office administrator.
    Admin,
    /// Self-service employee.
    Employee,
}

impl Role {
    /// Returns the authority string used in tokens, responses and storage.
    #[must_use]
    pub fn authority(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Employee => "ROLE_EMPLOYEE",
        }
    }

    /// Returns every known role.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::Employee];

        ALL
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.authority())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ROLE_ADMIN" => Ok(Self::Admin),
            "ROLE_EMPLOYEE" => Ok(Self::Employee),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.authority().to_owned()
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

/// Identity reconstructed from a verified bearer token.
///
/// Admin principals carry their numeric account id. Employee principals
/// are identified by employee code only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    subject_id: Option<i64>,
    subject_name: String,
    roles: BTreeSet<Role>,
}

impl Principal {
    /// Creates a principal from verified token claims.
    #[must_use]
    pub fn new(
        subject_id: Option<i64>,
        subject_name: impl Into<String>,
        roles: BTreeSet<Role>,
    ) -> Self {
        Self {
            subject_id,
            subject_name: subject_name.into(),
            roles,
        }
    }

    /// Returns the numeric account id, if the subject has one.
    #[must_use]
    pub fn subject_id(&self) -> Option<i64> {
        self.subject_id
    }

    /// Returns the username or employee code.
    #[must_use]
    pub fn subject_name(&self) -> &str {
        self.subject_name.as_str()
    }

    /// Returns the role claims carried by the token.
    #[must_use]
    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }
}
