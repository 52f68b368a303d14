use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use tower_http::trace::TraceLayer;
use workforce_core::AppError;

use crate::state::AppState;
use crate::{handlers, middleware};

mod access_policy;
mod cors;

pub use access_policy::operation_for;

use cors::build_cors_layer;

pub fn build_router(app_state: AppState, cors_allowed_origin: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route(
            "/employee",
            get(handlers::employees::list_employees_handler)
                .post(handlers::employees::create_employee_handler),
        )
        .route(
            "/employee/search",
            get(handlers::employees::search_employees_handler),
        )
        .route(
            "/employee/code/{employee_code}",
            get(handlers::employees::get_employee_by_code_handler),
        )
        .route(
            "/employee/department/{department_id}",
            get(handlers::employees::list_department_employees_handler),
        )
        .route(
            "/employee/{employee_id}",
            get(handlers::employees::get_employee_handler)
                .put(handlers::employees::update_employee_handler)
                .delete(handlers::employees::delete_employee_handler),
        )
        .route(
            "/employee/{employee_id}/address",
            post(handlers::employees::add_address_handler),
        )
        .route(
            "/employee/{employee_id}/address/{address_id}",
            put(handlers::employees::update_address_handler)
                .delete(handlers::employees::remove_address_handler),
        )
        .route(
            "/employee/{employee_id}/department/{department_id}",
            put(handlers::employees::assign_department_handler)
                .delete(handlers::employees::remove_department_handler),
        )
        .route(
            "/department",
            get(handlers::departments::list_departments_handler)
                .post(handlers::departments::create_department_handler),
        )
        .route(
            "/department/{department_id}",
            get(handlers::departments::get_department_handler)
                .put(handlers::departments::update_department_handler)
                .delete(handlers::departments::delete_department_handler),
        )
        .route(
            "/department/{department_id}/employees",
            get(handlers::departments::department_employees_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_authorization,
        ));

    let auth_routes = Router::new()
        .route(
            "/auth/admin/login",
            post(handlers::auth::admin_login_handler),
        )
        .route(
            "/auth/employee/login",
            post(handlers::auth::employee_login_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_allowed_origin)?)
        .with_state(app_state))
}

#[cfg(test)]
mod tests;
