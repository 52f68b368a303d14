use axum::extract::{MatchedPath, Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use workforce_core::AppError;

use crate::api_router::operation_for;
use crate::error::ApiResult;
use crate::state::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Authenticates the bearer token, then checks the caller's roles against
/// the operation registered for the matched route.
pub async fn require_authorization(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| malformed_header()))
        .transpose()?;
    let token = bearer_token(header_value)?;
    let principal = state.auth_service.verify_token(token)?;

    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_else(|| request.uri().path());
    let operation = operation_for(request.method(), route).ok_or_else(|| {
        AppError::Forbidden(format!(
            "no access policy registered for {} {route}",
            request.method()
        ))
    })?;
    state.authorization_service.require(&principal, operation)?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header_value: Option<&str>) -> Result<&str, AppError> {
    let value = header_value
        .ok_or_else(|| AppError::Unauthenticated("missing bearer token".to_owned()))?;

    let (scheme, token) = value.split_once(' ').ok_or_else(malformed_header)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) || token.is_empty() || token.contains(' ') {
        return Err(malformed_header());
    }

    Ok(token)
}

fn malformed_header() -> AppError {
    AppError::Unauthenticated("malformed authorization header".to_owned())
}

#[cfg(test)]
mod tests {
    use workforce_core::AppError;

    use super::bearer_token;

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token(Some("Bearer abc.def")).ok(), Some("abc.def"));
        assert_eq!(bearer_token(Some("bearer abc.def")).ok(), Some("abc.def"));
        assert_eq!(bearer_token(Some("BEARER abc.def")).ok(), Some("abc.def"));
    }

    #[test]
    fn missing_header_is_unauthenticated() {
        assert!(matches!(
            bearer_token(None),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn malformed_headers_are_unauthenticated() {
        for value in [
            "Bearer",
            "Bearer ",
            "Bearer  abc",
            "Basic abc",
            "Bearerabc",
            "Token abc",
        ] {
            assert!(
                matches!(bearer_token(Some(value)), Err(AppError::Unauthenticated(_))),
                "{value} should be rejected"
            );
        }
    }
}
