use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use secrecy::SecretString;

use super::InfraError;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: SecretString,
    pub db_max_connections: u32,
    /// Browser origin allowed to call the API (the landing page).
    pub cors_origin: HeaderValue,
    /// Apply the bundled migrations before serving.
    pub run_migrations: bool,
    /// Reject strings that are not syntactically valid addresses.
    /// Off by default: any non-empty string is accepted.
    pub strict_email_validation: bool,
    /// Optional path for structured JSON logs, in addition to the console.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        let get = |var: &str| lookup(var).filter(|s| !s.is_empty());

        let database_url: String = get("DATABASE_URL").ok_or(InfraError::ConfigMissing {
            var: "DATABASE_URL",
        })?;

        let bind_addr: SocketAddr =
            parse_or(get("BIND_ADDR"), "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)))?;
        let db_max_connections: u32 = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 5)?;
        let cors_origin: HeaderValue = parse_or(
            get("CORS_ORIGIN"),
            "CORS_ORIGIN",
            HeaderValue::from_static("http://localhost:3000"),
        )?;
        let run_migrations: bool = parse_or(get("RUN_MIGRATIONS"), "RUN_MIGRATIONS", true)?;
        let strict_email_validation: bool = parse_or(
            get("STRICT_EMAIL_VALIDATION"),
            "STRICT_EMAIL_VALIDATION",
            false,
        )?;
        let log_file: Option<PathBuf> = get("LOG_FILE").map(PathBuf::from);

        Ok(Self {
            bind_addr,
            database_url: SecretString::new(database_url.into()),
            db_max_connections,
            cors_origin,
            run_migrations,
            strict_email_validation,
            log_file,
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, InfraError> {
    match value {
        Some(raw) => raw.parse().map_err(|_| InfraError::ConfigInvalid { var }),
        None => Ok(default),
    }
}
