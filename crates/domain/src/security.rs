use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use workforce_core::{AppError, Role};

/// Protected operations enforced by the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Lists every employee.
    EmployeeList,
    /// Searches employees by name fragment.
    EmployeeSearch,
    /// Reads single employees or department rosters by employee.
    EmployeeRead,
    /// Creates an employee.
    EmployeeCreate,
    /// Updates employee contact details.
    EmployeeProfileUpdate,
    /// Deletes an employee.
    EmployeeDelete,
    /// Adds, edits or removes employee addresses.
    EmployeeAddressWrite,
    /// Assigns employees to departments or removes them.
    EmployeeDepartmentAssign,
    /// Reads departments.
    DepartmentRead,
    /// Reads the members of a department.
    DepartmentMembersRead,
    /// Creates, updates or deletes departments.
    DepartmentWrite,
}

impl Operation {
    /// Returns a stable value used in logs and error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeList => "employee.list",
            Self::EmployeeSearch => "employee.search",
            Self::EmployeeRead => "employee.read",
            Self::EmployeeCreate => "employee.create",
            Self::EmployeeProfileUpdate => "employee.profile.update",
            Self::EmployeeDelete => "employee.delete",
            Self::EmployeeAddressWrite => "employee.address.write",
            Self::EmployeeDepartmentAssign => "employee.department.assign",
            Self::DepartmentRead => "department.read",
            Self::DepartmentMembersRead => "department.members.read",
            Self::DepartmentWrite => "department.write",
        }
    }

    /// Returns all known operations.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Operation] = &[
            Operation::EmployeeList,
            Operation::EmployeeSearch,
            Operation::EmployeeRead,
            Operation::EmployeeCreate,
            Operation::EmployeeProfileUpdate,
            Operation::EmployeeDelete,
            Operation::EmployeeAddressWrite,
            Operation::EmployeeDepartmentAssign,
            Operation::DepartmentRead,
            Operation::DepartmentMembersRead,
            Operation::DepartmentWrite,
        ];

        ALL
    }

    /// Returns the roles of which a caller must hold at least one.
    #[must_use]
    pub fn required_roles(&self) -> BTreeSet<Role> {
        match self {
            Self::EmployeeRead
            | Self::EmployeeProfileUpdate
            | Self::EmployeeAddressWrite
            | Self::DepartmentRead => BTreeSet::from([Role::Admin, Role::Employee]),
            Self::EmployeeList
            | Self::EmployeeSearch
            | Self::EmployeeCreate
            | Self::EmployeeDelete
            | Self::EmployeeDepartmentAssign
            | Self::DepartmentMembersRead
            | Self::DepartmentWrite => BTreeSet::from([Role::Admin]),
        }
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|operation| operation.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown operation '{value}'")))
    }
}
