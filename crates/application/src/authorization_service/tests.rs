use std::collections::BTreeSet;

use workforce_core::{AppError, Principal, Role};
use workforce_domain::Operation;

use super::{AccessDecision, AuthorizationService};

fn principal(roles: &[Role]) -> Principal {
    Principal::new(None, "EMP001", roles.iter().copied().collect())
}

#[test]
fn authorize_allows_any_overlapping_role() {
    let service = AuthorizationService::new();
    let required = BTreeSet::from([Role::Admin, Role::Employee]);

    assert_eq!(
        service.authorize(&required, &BTreeSet::from([Role::Employee])),
        AccessDecision::Allow
    );
}

#[test]
fn authorize_denies_disjoint_roles() {
    let service = AuthorizationService::new();

    assert_eq!(
        service.authorize(
            &BTreeSet::from([Role::Admin]),
            &BTreeSet::from([Role::Employee])
        ),
        AccessDecision::Deny
    );
    assert_eq!(
        service.authorize(&BTreeSet::from([Role::Admin]), &BTreeSet::new()),
        AccessDecision::Deny
    );
}

#[test]
fn require_forbids_employee_on_admin_operation() {
    let service = AuthorizationService::new();

    let result = service.require(&principal(&[Role::Employee]), Operation::EmployeeCreate);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
fn require_admits_employee_on_shared_operation() {
    let service = AuthorizationService::new();

    let result = service.require(&principal(&[Role::Employee]), Operation::DepartmentRead);
    assert!(result.is_ok());
}
