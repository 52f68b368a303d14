//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_store;
mod jwt_token_issuer;
mod postgres_admin_user_repository;
mod postgres_department_repository;
mod postgres_employee_repository;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_store::InMemoryStore;
pub use jwt_token_issuer::{JwtTokenIssuer, MIN_SECRET_BYTES};
pub use postgres_admin_user_repository::PostgresAdminUserRepository;
pub use postgres_department_repository::PostgresDepartmentRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
