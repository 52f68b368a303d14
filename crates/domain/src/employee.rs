//! Employee records and the relationships they own.
//!
//! An employee is the owning side of both of its relationships: addresses
//! belong to exactly one employee, and department membership is recorded
//! against the employee. Departments never hold a list of employees; that
//! view is derived by query.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use workforce_core::{AppError, AppResult, NonEmptyString};

use crate::{
    Address, AddressDetails, AddressId, Department, DepartmentId, EmailAddress, EmployeeId,
    PhoneNumber,
};

/// Minimum employee code length.
pub const EMPLOYEE_CODE_MIN_LENGTH: usize = 6;
/// Maximum employee code length.
pub const EMPLOYEE_CODE_MAX_LENGTH: usize = 10;

/// Unique employee code: 6 to 10 uppercase ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeCode(String);

impl EmployeeCode {
    /// Creates a validated employee code.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let length_ok =
            (EMPLOYEE_CODE_MIN_LENGTH..=EMPLOYEE_CODE_MAX_LENGTH).contains(&value.len());
        let charset_ok = value
            .bytes()
            .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit());

        if !length_ok || !charset_ok {
            return Err(AppError::Validation(format!(
                "employee code must be {EMPLOYEE_CODE_MIN_LENGTH}-{EMPLOYEE_CODE_MAX_LENGTH} uppercase alphanumeric characters"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Gender recorded on an employee profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

impl Gender {
    /// Returns a stable storage value for the gender.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "OTHER" => Ok(Self::Other),
            _ => Err(AppError::Validation(format!("unknown gender '{value}'"))),
        }
    }
}

/// Optional contact channels of an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Work or personal email address.
    pub email: Option<EmailAddress>,
    /// Mobile phone number.
    pub mobile_number: Option<PhoneNumber>,
    /// Phone number to call in an emergency.
    pub emergency_contact: Option<PhoneNumber>,
}

impl ContactDetails {
    /// Validates raw contact inputs.
    pub fn parse(
        email: Option<String>,
        mobile_number: Option<String>,
        emergency_contact: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            email: email.map(EmailAddress::new).transpose()?,
            mobile_number: mobile_number
                .map(|value| PhoneNumber::new("mobile number", value))
                .transpose()?,
            emergency_contact: emergency_contact
                .map(|value| PhoneNumber::new("emergency contact", value))
                .transpose()?,
        })
    }

    /// Overwrites every channel present in `update`, keeping the rest.
    pub fn apply(&mut self, update: ContactDetails) {
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(mobile_number) = update.mobile_number {
            self.mobile_number = Some(mobile_number);
        }
        if let Some(emergency_contact) = update.emergency_contact {
            self.emergency_contact = Some(emergency_contact);
        }
    }
}

/// Validated employee fields supplied at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    name: NonEmptyString,
    date_of_birth: NaiveDate,
    gender: Gender,
    employee_code: EmployeeCode,
    contact: ContactDetails,
}

impl EmployeeProfile {
    /// Creates a profile. `today` bounds the date of birth, which must lie
    /// strictly in the past.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        employee_code: EmployeeCode,
        contact: ContactDetails,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let name = NonEmptyString::new(name)
            .map_err(|_| AppError::Validation("name is required".to_owned()))?;

        if date_of_birth >= today {
            return Err(AppError::Validation(
                "date of birth must be in the past".to_owned(),
            ));
        }

        Ok(Self {
            name,
            date_of_birth,
            gender,
            employee_code,
            contact,
        })
    }

    /// Returns the employee's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the date of birth.
    #[must_use]
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Returns the gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the unique employee code.
    #[must_use]
    pub fn employee_code(&self) -> &EmployeeCode {
        &self.employee_code
    }

    /// Returns the contact channels.
    #[must_use]
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}

/// Compact employee projection used in department listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Unique employee code.
    pub employee_code: String,
}

/// Persisted employee with its addresses and department memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    profile: EmployeeProfile,
    addresses: Vec<Address>,
    departments: Vec<Department>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Employee {
    /// Creates an employee from storage state.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        profile: EmployeeProfile,
        addresses: Vec<Address>,
        departments: Vec<Department>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            profile,
            addresses,
            departments,
            created_at,
            updated_at,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the profile fields.
    #[must_use]
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the addresses owned by this employee.
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Returns the departments this employee belongs to.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
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

    /// Returns the compact projection of this employee.
    #[must_use]
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id,
            name: self.profile.name().to_owned(),
            employee_code: self.profile.employee_code().as_str().to_owned(),
        }
    }

    /// Returns true when the employee is a member of `department_id`.
    #[must_use]
    pub fn belongs_to(&self, department_id: DepartmentId) -> bool {
        self.departments
            .iter()
            .any(|department| department.id() == department_id)
    }

    /// Finds an owned address or fails with `NotFound`.
    pub fn address(&self, address_id: AddressId) -> AppResult<&Address> {
        self.addresses
            .iter()
            .find(|address| address.id() == address_id)
            .ok_or_else(|| self.missing_address(address_id))
    }

    /// Applies a contact patch to the profile.
    pub fn update_contact(&mut self, update: ContactDetails, now: DateTime<Utc>) {
        self.profile.contact.apply(update);
        self.updated_at = now;
    }

    /// Takes ownership of a newly stored address.
    ///
    /// Relationship changes leave `updated_at` alone; it tracks profile edits.
    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    /// Replaces the fields of an owned address.
    pub fn update_address(
        &mut self,
        address_id: AddressId,
        details: AddressDetails,
    ) -> AppResult<()> {
        let missing = self.missing_address(address_id);
        let address = self
            .addresses
            .iter_mut()
            .find(|address| address.id() == address_id)
            .ok_or(missing)?;

        address.replace_details(details);
        Ok(())
    }

    /// Releases an owned address.
    pub fn remove_address(&mut self, address_id: AddressId) -> AppResult<Address> {
        let position = self
            .addresses
            .iter()
            .position(|address| address.id() == address_id)
            .ok_or_else(|| self.missing_address(address_id))?;

        Ok(self.addresses.remove(position))
    }

    /// Records membership in a department. Returns false if already a member.
    pub fn join_department(&mut self, department: Department) -> bool {
        if self.belongs_to(department.id()) {
            return false;
        }

        self.departments.push(department);
        true
    }

    /// Drops membership in a department. Returns false if not a member.
    pub fn leave_department(&mut self, department_id: DepartmentId) -> bool {
        let before = self.departments.len();
        self.departments
            .retain(|department| department.id() != department_id);

        self.departments.len() != before
    }

    /// Replaces the cached copy of a department after it was edited.
    pub fn refresh_department(&mut self, department: &Department) {
        for existing in &mut self.departments {
            if existing.id() == department.id() {
                *existing = department.clone();
            }
        }
    }

    fn missing_address(&self, address_id: AddressId) -> AppError {
        AppError::NotFound(format!(
            "address {address_id} not found for employee {}",
            self.id
        ))
    }
}
