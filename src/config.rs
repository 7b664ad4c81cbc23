//! Server configuration loaded from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// Upper bound on request body size.
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// | Env Var              | Default           |
    /// |----------------------|-------------------|
    /// | `HOST`               | `127.0.0.1`       |
    /// | `PORT`               | `5555`            |
    /// | `DATABASE_URL`       | `DB_URI`, then `sqlite://app.db` |
    /// | `DB_MAX_CONNECTIONS` | `5`               |
    /// | `BODY_LIMIT_BYTES`   | `65536`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = parse_or(&lookup, "PORT", 5555)?;
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?;
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", 64 * 1024)?;
        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            body_limit_bytes,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
