use std::str::FromStr;

use serde::{Deserialize, Serialize};
use workforce_core::{AppError, AppResult, NonEmptyString};

use crate::AddressId;

/// Purpose of an employee address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    /// Permanent home address.
    Permanent,
    /// Current place of residence.
    Residential,
    /// Postal correspondence address.
    Correspondence,
}

impl AddressType {
    /// Returns a stable storage value for the address type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "PERMANENT",
            Self::Residential => "RESIDENTIAL",
            Self::Correspondence => "CORRESPONDENCE",
        }
    }
}

impl FromStr for AddressType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PERMANENT" => Ok(Self::Permanent),
            "RESIDENTIAL" => Ok(Self::Residential),
            "CORRESPONDENCE" => Ok(Self::Correspondence),
            _ => Err(AppError::Validation(format!(
                "address type must be PERMANENT, RESIDENTIAL, or CORRESPONDENCE, got '{value}'"
            ))),
        }
    }
}

/// Validated address fields, without identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    address_type: AddressType,
    street: NonEmptyString,
    city: NonEmptyString,
    state: NonEmptyString,
    country: NonEmptyString,
    postal_code: NonEmptyString,
}

impl AddressDetails {
    /// Creates address details, rejecting blank components.
    pub fn new(
        address_type: AddressType,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            address_type,
            street: required("street address", street)?,
            city: required("city", city)?,
            state: required("state", state)?,
            country: required("country", country)?,
            postal_code: required("postal code", postal_code)?,
        })
    }

    /// Returns the address type.
    #[must_use]
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Returns the street line.
    #[must_use]
    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Returns the state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    /// Returns the country.
    #[must_use]
    pub fn country(&self) -> &str {
        self.country.as_str()
    }

    /// Returns the postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        self.postal_code.as_str()
    }
}

fn required(field: &str, value: impl Into<String>) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value)
        .map_err(|_| AppError::Validation(format!("{field} cannot be empty")))
}

/// Persisted address owned by exactly one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    id: AddressId,
    details: AddressDetails,
}

impl Address {
    /// Creates an address from storage identity and validated details.
    #[must_use]
    pub fn new(id: AddressId, details: AddressDetails) -> Self {
        Self { id, details }
    }

    /// Returns the address identifier.
    #[must_use]
    pub fn id(&self) -> AddressId {
        self.id
    }

    /// Returns the address fields.
    #[must_use]
    pub fn details(&self) -> &AddressDetails {
        &self.details
    }

    pub(crate) fn replace_details(&mut self, details: AddressDetails) {
        self.details = details;
    }
}
