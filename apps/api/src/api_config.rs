use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use chrono::Duration;
use tracing_subscriber::EnvFilter;
use workforce_core::AppError;
use workforce_infrastructure::MIN_SECRET_BYTES;

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_JWT_TTL_SECONDS: i64 = 86_400;
const MAX_JWT_TTL_SECONDS: i64 = 10 * 365 * 86_400;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl_seconds: i64,
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origin: String,
    pub bootstrap_default_admin: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = required_env("DATABASE_URL")?;
        let database_max_connections =
            parsed_env("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?;

        // Migrations do not sign tokens.
        let jwt_secret = if migrate_only {
            env::var("JWT_SECRET").unwrap_or_default()
        } else {
            required_env("JWT_SECRET")?
        };
        if !migrate_only && jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::Validation(format!(
                "JWT_SECRET must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        let jwt_ttl_seconds =
            validated_ttl(parsed_env("JWT_TTL_SECONDS", DEFAULT_JWT_TTL_SECONDS)?)?;

        let api_host = env::var("API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_owned());
        let api_port = parsed_env("API_PORT", DEFAULT_API_PORT)?;
        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_owned());
        let bootstrap_default_admin = env::var("BOOTSTRAP_DEFAULT_ADMIN")
            .map(|value| !value.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_ttl_seconds,
            api_host,
            api_port,
            cors_allowed_origin,
            bootstrap_default_admin,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }

    pub fn token_ttl(&self) -> Result<Duration, AppError> {
        Duration::try_seconds(validated_ttl(self.jwt_ttl_seconds)?).ok_or_else(|| {
            AppError::Validation(format!(
                "JWT_TTL_SECONDS {} is out of range",
                self.jwt_ttl_seconds
            ))
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn validated_ttl(seconds: i64) -> Result<i64, AppError> {
    if !(1..=MAX_JWT_TTL_SECONDS).contains(&seconds) {
        return Err(AppError::Validation(format!(
            "JWT_TTL_SECONDS must be between 1 and {MAX_JWT_TTL_SECONDS}"
        )));
    }

    Ok(seconds)
}

fn required_env(name: &str) -> Result<String, AppError> {
    let value =
        env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn parsed_env<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use workforce_core::AppError;

    use super::{ApiConfig, MAX_JWT_TTL_SECONDS, validated_ttl};

    fn config_with_ttl(jwt_ttl_seconds: i64) -> ApiConfig {
        ApiConfig {
            migrate_only: false,
            database_url: "postgres://localhost/workforce".to_owned(),
            database_max_connections: 1,
            jwt_secret: "0123456789abcdef0123456789abcdef".to_owned(),
            jwt_ttl_seconds,
            api_host: "127.0.0.1".to_owned(),
            api_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_owned(),
            bootstrap_default_admin: true,
        }
    }

    #[test]
    fn token_lifetime_must_be_positive_and_bounded() {
        for seconds in [0, -1, MAX_JWT_TTL_SECONDS + 1, 9_300_000_000_000_000, i64::MAX] {
            assert!(matches!(validated_ttl(seconds), Err(AppError::Validation(_))));
        }
        assert_eq!(validated_ttl(86_400).ok(), Some(86_400));
        assert_eq!(validated_ttl(MAX_JWT_TTL_SECONDS).ok(), Some(MAX_JWT_TTL_SECONDS));
    }

    #[test]
    fn oversized_lifetime_is_rejected_without_panicking() {
        assert!(matches!(
            config_with_ttl(i64::MAX).token_ttl(),
            Err(AppError::Validation(_))
        ));
        assert_eq!(
            config_with_ttl(3_600).token_ttl().ok().map(|ttl| ttl.num_seconds()),
            Some(3_600)
        );
    }
}
