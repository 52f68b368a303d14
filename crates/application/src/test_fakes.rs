use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use tokio::sync::Mutex;
use workforce_core::{AppError, AppResult, Principal, Role};
use workforce_domain::{
    Address, AddressDetails, AddressId, AdminUserId, ContactDetails, Department,
    DepartmentDetails, DepartmentId, Employee, EmployeeId, EmployeeProfile, Username,
};

use crate::{
    AdminUserRecord, AdminUserRepository, DepartmentRepository, EmployeeRepository, IssuedToken,
    PasswordHasher, TokenIssuer,
};

#[derive(Default)]
struct DirectoryState {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    next_id: i64,
}

impl DirectoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn employee_mut(&mut self, employee_id: EmployeeId) -> AppResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.id() == employee_id)
            .ok_or_else(|| AppError::NotFound(format!("employee {employee_id} not found")))
    }
}

/// Employee and department store sharing one lock.
#[derive(Default)]
pub(crate) struct FakeDirectory {
    state: Mutex<DirectoryState>,
}

#[async_trait]
impl EmployeeRepository for FakeDirectory {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.state.lock().await.employees.clone())
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self
            .state
            .lock()
            .await
            .employees
            .iter()
            .find(|employee| employee.id() == employee_id)
            .cloned())
    }

    async fn find_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .state
            .lock()
            .await
            .employees
            .iter()
            .find(|employee| employee.profile().employee_code().as_str() == employee_code)
            .cloned())
    }

    async fn find_by_code_and_date_of_birth(
        &self,
        employee_code: &str,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<Employee>> {
        Ok(self
            .find_by_code(employee_code)
            .await?
            .filter(|employee| employee.profile().date_of_birth() == date_of_birth))
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .state
            .lock()
            .await
            .employees
            .iter()
            .filter(|employee| employee.profile().name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_by_department(&self, department_id: DepartmentId) -> AppResult<Vec<Employee>> {
        Ok(self
            .state
            .lock()
            .await
            .employees
            .iter()
            .filter(|employee| employee.belongs_to(department_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        profile: &EmployeeProfile,
        addresses: &[AddressDetails],
    ) -> AppResult<Employee> {
        let mut state = self.state.lock().await;
        let id = EmployeeId::new(state.next_id());
        let addresses = addresses
            .iter()
            .map(|details| Address::new(AddressId::new(state.next_id()), details.clone()))
            .collect();
        let now = Utc::now();
        let employee = Employee::new(id, profile.clone(), addresses, Vec::new(), now, now);
        state.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_contact(
        &self,
        employee_id: EmployeeId,
        contact: &ContactDetails,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state
            .employee_mut(employee_id)?
            .update_contact(contact.clone(), Utc::now());
        Ok(())
    }

    async fn insert_address(
        &self,
        employee_id: EmployeeId,
        details: &AddressDetails,
    ) -> AppResult<Address> {
        let mut state = self.state.lock().await;
        let address = Address::new(AddressId::new(state.next_id()), details.clone());
        state
            .employee_mut(employee_id)?
            .add_address(address.clone());
        Ok(address)
    }

    async fn update_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
        details: &AddressDetails,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state
            .employee_mut(employee_id)?
            .update_address(address_id, details.clone())
    }

    async fn delete_address(
        &self,
        employee_id: EmployeeId,
        address_id: AddressId,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state
            .employee_mut(employee_id)?
            .remove_address(address_id)
            .map(|_| ())
    }

    async fn add_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let department = state
            .departments
            .iter()
            .find(|department| department.id() == department_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("department {department_id} not found")))?;
        state
            .employee_mut(employee_id)?
            .join_department(department);
        Ok(())
    }

    async fn remove_membership(
        &self,
        employee_id: EmployeeId,
        department_id: DepartmentId,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state
            .employee_mut(employee_id)?
            .leave_department(department_id);
        Ok(())
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.employees.len();
        state.employees.retain(|employee| employee.id() != employee_id);
        Ok(state.employees.len() != before)
    }
}

#[async_trait]
impl DepartmentRepository for FakeDirectory {
    async fn list(&self) -> AppResult<Vec<Department>> {
        Ok(self.state.lock().await.departments.clone())
    }

    async fn find_by_id(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        Ok(self
            .state
            .lock()
            .await
            .departments
            .iter()
            .find(|department| department.id() == department_id)
            .cloned())
    }

    async fn create(&self, details: &DepartmentDetails) -> AppResult<Department> {
        let mut state = self.state.lock().await;
        if state
            .departments
            .iter()
            .any(|department| department.details().name() == details.name())
        {
            return Err(AppError::Conflict("department name taken".to_owned()));
        }

        let now = Utc::now();
        let department = Department::new(
            DepartmentId::new(state.next_id()),
            details.clone(),
            now,
            now,
        );
        state.departments.push(department.clone());
        Ok(department)
    }

    async fn update(
        &self,
        department_id: DepartmentId,
        details: &DepartmentDetails,
    ) -> AppResult<Option<Department>> {
        let mut state = self.state.lock().await;
        if state.departments.iter().any(|department| {
            department.id() != department_id && department.details().name() == details.name()
        }) {
            return Err(AppError::Conflict("department name taken".to_owned()));
        }

        let Some(position) = state
            .departments
            .iter()
            .position(|department| department.id() == department_id)
        else {
            return Ok(None);
        };

        let created_at = state.departments[position].created_at();
        let updated = Department::new(department_id, details.clone(), created_at, Utc::now());
        state.departments[position] = updated.clone();
        for employee in &mut state.employees {
            employee.refresh_department(&updated);
        }
        Ok(Some(updated))
    }

    async fn delete(&self, department_id: DepartmentId) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.departments.len();
        state
            .departments
            .retain(|department| department.id() != department_id);
        for employee in &mut state.employees {
            employee.leave_department(department_id);
        }
        Ok(state.departments.len() != before)
    }
}

/// Admin account store recording seeded roles.
#[derive(Default)]
pub(crate) struct FakeAdminUsers {
    pub(crate) roles: Mutex<BTreeSet<Role>>,
    pub(crate) users: Mutex<Vec<AdminUserRecord>>,
}

#[async_trait]
impl AdminUserRepository for FakeAdminUsers {
    async fn ensure_roles(&self, roles: &[Role]) -> AppResult<()> {
        self.roles.lock().await.extend(roles.iter().copied());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUserRecord>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn any_with_role(&self, role: Role) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .any(|user| user.roles.contains(&role)))
    }

    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        roles: &BTreeSet<Role>,
    ) -> AppResult<AdminUserId> {
        let stored_roles = self.roles.lock().await;
        if !roles.is_subset(&stored_roles) {
            return Err(AppError::Internal("role row missing".to_owned()));
        }

        let mut users = self.users.lock().await;
        if users.iter().any(|user| user.username == username.as_str()) {
            return Err(AppError::Conflict("username taken".to_owned()));
        }

        let id = AdminUserId::new(i64::try_from(users.len()).unwrap_or(i64::MAX) + 1);
        users.push(AdminUserRecord {
            id,
            username: username.as_str().to_owned(),
            password_hash: password_hash.to_owned(),
            roles: roles.clone(),
        });
        Ok(id)
    }
}

/// Reversible "hash" that counts how often hashing ran.
#[derive(Default)]
pub(crate) struct FakePasswordHasher {
    pub(crate) hash_calls: AtomicUsize,
}

impl PasswordHasher for FakePasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Token issuer encoding the principal as plain text.
#[derive(Default)]
pub(crate) struct FakeTokenIssuer;

impl TokenIssuer for FakeTokenIssuer {
    fn issue(
        &self,
        subject_id: Option<i64>,
        subject_name: &str,
        roles: &BTreeSet<Role>,
        ttl: Duration,
    ) -> AppResult<IssuedToken> {
        let roles = roles
            .iter()
            .map(Role::authority)
            .collect::<Vec<_>>()
            .join(",");
        let subject_id = subject_id.map(|id| id.to_string()).unwrap_or_default();

        Ok(IssuedToken {
            token: format!("{subject_id}|{subject_name}|{roles}"),
            expires_at: Utc::now() + ttl,
        })
    }

    fn verify(&self, token: &str) -> AppResult<Principal> {
        let mut parts = token.split('|');
        let (Some(subject_id), Some(subject_name), Some(roles)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::Unauthenticated("malformed token".to_owned()));
        };

        let subject_id = subject_id.parse::<i64>().ok();
        let roles = roles
            .split(',')
            .map(str::parse::<Role>)
            .collect::<AppResult<BTreeSet<_>>>()
            .map_err(|_| AppError::Unauthenticated("malformed token".to_owned()))?;

        Ok(Principal::new(subject_id, subject_name, roles))
    }
}

/// Shared fakes wired the way services are composed at runtime.
pub(crate) struct Fixture {
    pub(crate) directory: Arc<FakeDirectory>,
    pub(crate) admin_users: Arc<FakeAdminUsers>,
    pub(crate) password_hasher: Arc<FakePasswordHasher>,
    pub(crate) token_issuer: Arc<FakeTokenIssuer>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            directory: Arc::new(FakeDirectory::default()),
            admin_users: Arc::new(FakeAdminUsers::default()),
            password_hasher: Arc::new(FakePasswordHasher::default()),
            token_issuer: Arc::new(FakeTokenIssuer),
        }
    }

    pub(crate) fn employee_service(&self) -> crate::EmployeeService {
        crate::EmployeeService::new(self.directory.clone(), self.directory.clone())
    }

    pub(crate) fn department_service(&self) -> crate::DepartmentService {
        crate::DepartmentService::new(self.directory.clone(), self.directory.clone())
    }
}

pub(crate) fn employee_input(code: &str, date_of_birth: NaiveDate) -> crate::CreateEmployeeInput {
    crate::CreateEmployeeInput {
        name: "Jane Doe".to_owned(),
        date_of_birth,
        gender: "FEMALE".to_owned(),
        employee_code: code.to_owned(),
        email: Some("jane@example.com".to_owned()),
        mobile_number: Some("7596943998".to_owned()),
        emergency_contact: None,
        addresses: vec![address_input("PERMANENT")],
    }
}

pub(crate) fn address_input(address_type: &str) -> crate::AddressInput {
    crate::AddressInput {
        address_type: address_type.to_owned(),
        street: "91 Lawrence St".to_owned(),
        city: "Kolkata".to_owned(),
        state: "WB".to_owned(),
        country: "India".to_owned(),
        postal_code: "712258".to_owned(),
    }
}

pub(crate) fn department_input(name: &str) -> crate::DepartmentInput {
    crate::DepartmentInput {
        name: name.to_owned(),
        description: "Software development team".to_owned(),
        department_type: "TECHNICAL".to_owned(),
        responsibilities: None,
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
