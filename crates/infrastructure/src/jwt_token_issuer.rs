//! HS256 bearer tokens.
//!
//! Tokens are self-contained: nothing is persisted and there is no
//! revocation list. A token is valid until its `exp` claim passes.

use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use workforce_application::{IssuedToken, TokenIssuer};
use workforce_core::{AppError, AppResult, Principal, Role};

/// Minimum signing key length in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    /// Admin account id when `roles` holds `ROLE_ADMIN`, otherwise the employee code.
    sub: String,
    /// Username or employee code.
    name: String,
    roles: BTreeSet<Role>,
    iat: i64,
    exp: i64,
    jti: String,
}

/// [`TokenIssuer`] signing HS256 JWTs with a process-wide secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates an issuer from the raw secret.
    pub fn new(secret: &[u8]) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::Validation(format!(
                "JWT secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        subject_id: Option<i64>,
        subject_name: &str,
        roles: &BTreeSet<Role>,
        ttl: Duration,
    ) -> AppResult<IssuedToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::Internal(format!("token lifetime {ttl} is out of range")))?;
        let claims = TokenClaims {
            sub: subject_id.map_or_else(|| subject_name.to_owned(), |id| id.to_string()),
            name: subject_name.to_owned(),
            roles: roles.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign token: {error}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> AppResult<Principal> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::Unauthenticated(format!("invalid bearer token: {error}")),
            })?
            .claims;

        // Admin accounts are addressed by id; employees only by code.
        let subject_id = if claims.roles.contains(&Role::Admin) {
            let id = claims.sub.parse::<i64>().map_err(|_| {
                AppError::Unauthenticated("invalid bearer token: malformed subject".to_owned())
            })?;
            Some(id)
        } else {
            None
        };

        Ok(Principal::new(subject_id, claims.name, claims.roles))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use workforce_application::TokenIssuer;
    use workforce_core::{AppError, Role};

    use super::JwtTokenIssuer;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new(SECRET).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn admin_token_roundtrips_id_and_roles() {
        let issuer = issuer();
        let roles = BTreeSet::from([Role::Admin]);
        let issued = issuer
            .issue(Some(1), "admin", &roles, Duration::hours(24))
            .unwrap_or_else(|_| unreachable!());

        let principal = issuer
            .verify(&issued.token)
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(principal.subject_id(), Some(1));
        assert_eq!(principal.subject_name(), "admin");
        assert_eq!(principal.roles(), &roles);
    }

    #[test]
    fn employee_token_has_no_numeric_subject() {
        let issuer = issuer();
        let issued = issuer
            .issue(
                None,
                "EMP001",
                &BTreeSet::from([Role::Employee]),
                Duration::hours(1),
            )
            .unwrap_or_else(|_| unreachable!());

        let principal = issuer
            .verify(&issued.token)
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(principal.subject_id(), None);
        assert_eq!(principal.subject_name(), "EMP001");
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let issuer = issuer();
        let issued = issuer
            .issue(
                Some(1),
                "admin",
                &BTreeSet::from([Role::Admin]),
                Duration::seconds(-120),
            )
            .unwrap_or_else(|_| unreachable!());

        assert!(matches!(issuer.verify(&issued.token), Err(AppError::TokenExpired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenIssuer::new(b"fedcba9876543210fedcba9876543210")
            .unwrap_or_else(|_| unreachable!());
        let issued = other
            .issue(None, "EMP001", &BTreeSet::from([Role::Employee]), Duration::hours(1))
            .unwrap_or_else(|_| unreachable!());

        assert!(matches!(
            issuer().verify(&issued.token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn unknown_role_claim_is_rejected() {
        let now = chrono::Utc::now().timestamp();
        let claims = json!({
            "sub": "EMP001",
            "name": "EMP001",
            "roles": ["ROLE_ROOT"],
            "iat": now,
            "exp": now + 3600,
            "jti": "b6f1a2c4-0000-4000-8000-000000000000",
        });
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET))
            .unwrap_or_else(|_| unreachable!());

        assert!(matches!(
            issuer().verify(&token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn admin_named_after_own_id_keeps_numeric_subject() {
        let issuer = issuer();
        let issued = issuer
            .issue(Some(1), "1", &BTreeSet::from([Role::Admin]), Duration::hours(1))
            .unwrap_or_else(|_| unreachable!());

        let principal = issuer
            .verify(&issued.token)
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(principal.subject_id(), Some(1));
        assert_eq!(principal.subject_name(), "1");
    }

    #[test]
    fn numeric_employee_code_stays_without_subject_id() {
        let issuer = issuer();
        let issued = issuer
            .issue(None, "123456", &BTreeSet::from([Role::Employee]), Duration::hours(1))
            .unwrap_or_else(|_| unreachable!());

        let principal = issuer
            .verify(&issued.token)
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(principal.subject_id(), None);
    }

    #[test]
    fn lifetime_beyond_calendar_range_is_an_error() {
        let result = issuer().issue(
            Some(1),
            "admin",
            &BTreeSet::from([Role::Admin]),
            Duration::seconds(1_000_000_000_000_000),
        );

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn short_secret_is_refused() {
        assert!(JwtTokenIssuer::new(b"too-short").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            issuer().verify("not.a.jwt"),
            Err(AppError::Unauthenticated(_))
        ));
    }
}
