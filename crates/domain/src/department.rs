use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use workforce_core::{AppError, AppResult, NonEmptyString};

use crate::DepartmentId;

/// Maximum department name length.
pub const DEPARTMENT_NAME_MAX_LENGTH: usize = 100;
/// Maximum department description length.
pub const DEPARTMENT_DESCRIPTION_MAX_LENGTH: usize = 500;
/// Maximum department responsibilities length.
pub const DEPARTMENT_RESPONSIBILITIES_MAX_LENGTH: usize = 1000;

/// Functional classification of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepartmentType {
    /// Engineering and technology.
    Technical,
    /// Human resources.
    Hr,
    /// Finance and accounting.
    Finance,
    /// Marketing.
    Marketing,
    /// Operations.
    Operations,
    /// Customer support.
    CustomerSupport,
}

impl DepartmentType {
    /// Returns a stable storage value for the department type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "TECHNICAL",
            Self::Hr => "HR",
            Self::Finance => "FINANCE",
            Self::Marketing => "MARKETING",
            Self::Operations => "OPERATIONS",
            Self::CustomerSupport => "CUSTOMER_SUPPORT",
        }
    }
}

impl FromStr for DepartmentType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "TECHNICAL" => Ok(Self::Technical),
            "HR" => Ok(Self::Hr),
            "FINANCE" => Ok(Self::Finance),
            "MARKETING" => Ok(Self::Marketing),
            "OPERATIONS" => Ok(Self::Operations),
            "CUSTOMER_SUPPORT" => Ok(Self::CustomerSupport),
            _ => Err(AppError::Validation(format!(
                "unknown department type '{value}'"
            ))),
        }
    }
}

/// Validated department fields, without identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDetails {
    name: NonEmptyString,
    description: NonEmptyString,
    department_type: DepartmentType,
    responsibilities: Option<String>,
}

impl DepartmentDetails {
    /// Creates department details with length limits applied.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        department_type: DepartmentType,
        responsibilities: Option<String>,
    ) -> AppResult<Self> {
        let name =
            NonEmptyString::with_max_length("department name", name, DEPARTMENT_NAME_MAX_LENGTH)?;
        let description = NonEmptyString::with_max_length(
            "department description",
            description,
            DEPARTMENT_DESCRIPTION_MAX_LENGTH,
        )?;

        if let Some(value) = responsibilities.as_deref()
            && value.chars().count() > DEPARTMENT_RESPONSIBILITIES_MAX_LENGTH
        {
            return Err(AppError::Validation(format!(
                "responsibilities cannot exceed {DEPARTMENT_RESPONSIBILITIES_MAX_LENGTH} characters"
            )));
        }

        Ok(Self {
            name,
            description,
            department_type,
            responsibilities,
        })
    }

    /// Returns the unique department name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the department type.
    #[must_use]
    pub fn department_type(&self) -> DepartmentType {
        self.department_type
    }

    /// Returns the responsibilities text, if any.
    #[must_use]
    pub fn responsibilities(&self) -> Option<&str> {
        self.responsibilities.as_deref()
    }
}

/// Persisted department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    details: DepartmentDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Department {
    /// Creates a department from storage identity and timestamps.
    #[must_use]
    pub fn new(
        id: DepartmentId,
        details: DepartmentDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at,
        }
    }

    /// Returns the department identifier.
    #[must_use]
    pub fn id(&self) -> DepartmentId {
        self.id
    }

    /// Returns the department fields.
    #[must_use]
    pub fn details(&self) -> &DepartmentDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
