use axum::http::Method;
use workforce_domain::Operation;

/// Route templates mapped to the operation they perform.
///
/// A protected route that is missing here is denied.
const ACCESS_POLICY: &[(&str, &str, Operation)] = &[
    ("GET", "/employee", Operation::EmployeeList),
    ("POST", "/employee", Operation::EmployeeCreate),
    ("GET", "/employee/search", Operation::EmployeeSearch),
    ("GET", "/employee/{employee_id}", Operation::EmployeeRead),
    ("PUT", "/employee/{employee_id}", Operation::EmployeeProfileUpdate),
    ("DELETE", "/employee/{employee_id}", Operation::EmployeeDelete),
    ("GET", "/employee/code/{employee_code}", Operation::EmployeeRead),
    ("GET", "/employee/department/{department_id}", Operation::EmployeeRead),
    ("POST", "/employee/{employee_id}/address", Operation::EmployeeAddressWrite),
    ("PUT", "/employee/{employee_id}/address/{address_id}", Operation::EmployeeAddressWrite),
    ("DELETE", "/employee/{employee_id}/address/{address_id}", Operation::EmployeeAddressWrite),
    (
        "PUT",
        "/employee/{employee_id}/department/{department_id}",
        Operation::EmployeeDepartmentAssign,
    ),
    (
        "DELETE",
        "/employee/{employee_id}/department/{department_id}",
        Operation::EmployeeDepartmentAssign,
    ),
    ("GET", "/department", Operation::DepartmentRead),
    ("POST", "/department", Operation::DepartmentWrite),
    ("GET", "/department/{department_id}", Operation::DepartmentRead),
    ("PUT", "/department/{department_id}", Operation::DepartmentWrite),
    ("DELETE", "/department/{department_id}", Operation::DepartmentWrite),
    ("GET", "/department/{department_id}/employees", Operation::DepartmentMembersRead),
];

/// Looks up the operation for a method and matched route template.
pub fn operation_for(method: &Method, route: &str) -> Option<Operation> {
    ACCESS_POLICY
        .iter()
        .find(|(policy_method, template, _)| {
            *policy_method == method.as_str() && *template == route
        })
        .map(|(_, _, operation)| *operation)
}

#[cfg(test)]
mod tests {
    use axum::http::Method;
    use workforce_core::Role;
    use workforce_domain::Operation;

    use super::{ACCESS_POLICY, operation_for};

    #[test]
    fn unlisted_routes_have_no_operation() {
        assert_eq!(operation_for(&Method::PATCH, "/employee/{employee_id}"), None);
        assert_eq!(operation_for(&Method::GET, "/employee/42"), None);
        assert_eq!(operation_for(&Method::GET, "/payroll"), None);
    }

    #[test]
    fn admin_only_routes_exclude_employees() {
        for (method, route) in [
            (Method::GET, "/employee"),
            (Method::POST, "/employee"),
            (Method::GET, "/employee/search"),
            (Method::DELETE, "/employee/{employee_id}"),
            (Method::POST, "/department"),
            (Method::GET, "/department/{department_id}/employees"),
        ] {
            let operation = operation_for(&method, route).unwrap_or_else(|| unreachable!());
            assert!(!operation.required_roles().contains(&Role::Employee));
        }
    }

    #[test]
    fn employee_reads_admit_both_roles() {
        let operation = operation_for(&Method::GET, "/employee/code/{employee_code}");
        assert_eq!(operation, Some(Operation::EmployeeRead));
    }

    #[test]
    fn each_route_is_registered_once() {
        for (index, (method, route, _)) in ACCESS_POLICY.iter().enumerate() {
            let duplicates = ACCESS_POLICY[index + 1..]
                .iter()
                .filter(|(other_method, other_route, _)| {
                    other_method == method && other_route == route
                })
                .count();
            assert_eq!(duplicates, 0, "{method} {route} is registered twice");
        }
    }
}
