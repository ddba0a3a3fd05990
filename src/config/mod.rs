//! Application configuration loaded from environment.

use axum::http::HeaderValue;
use std::net::SocketAddr;

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. `0.0.0.0:3001`).
    pub server_addr: SocketAddr,
    /// PostgreSQL connection URL. `None` runs against the in-process user store.
    pub database_url: Option<String>,
    /// Session token signing secret. Required.
    pub jwt_secret: String,
    /// Browser origin allowed to call the API with credentials.
    pub cors_origin: HeaderValue,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3001".to_string());
        let server_addr: SocketAddr = server_addr
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr)?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        // The secret must exist before any login traffic is accepted.
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigLoadError::MissingJwtSecret)?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());
        let cors_origin = HeaderValue::from_str(&cors_origin)
            .map_err(|_| ConfigLoadError::InvalidCorsOrigin)?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server_addr,
            database_url,
            jwt_secret,
            cors_origin,
            log_level,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid SERVER_ADDR")]
    InvalidServerAddr,
    #[error("JWT_SECRET not defined")]
    MissingJwtSecret,
    #[error("Invalid CORS_ORIGIN")]
    InvalidCorsOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.server_addr.port(), 3001);
        assert!(config.database_url.is_none());
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_secret_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingJwtSecret));

        let err = Config::from_lookup(lookup_from(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingJwtSecret));
    }

    #[test]
    fn rejects_bad_server_addr() {
        let err = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("SERVER_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidServerAddr));
    }

    #[test]
    fn blank_database_url_means_no_database() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", ""),
        ]))
        .unwrap();
        assert!(config.database_url.is_none());
    }
}
