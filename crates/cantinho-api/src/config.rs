//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8000` |
//! | `STORE_BACKEND` | `postgres` (`postgres` or `memory`) |
//! | `DATABASE_URL` | unset (service-degraded mode) |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `MAX_UPLOAD_BYTES` | `10485760` |
//! | `CORS_ALLOWED_ORIGINS` | unset (any origin) |
//!
//! Logging variables (`LOG_FORMAT`, `LOG_FILE`, `LOG_ANSI`, `RUST_LOG`) are
//! read by `main` when the subscriber is installed.

use std::net::SocketAddr;
use std::str::FromStr;

use cantinho_core::defaults::{MAX_UPLOAD_BYTES, SERVER_HOST, SERVER_PORT};
use cantinho_core::{Error, Result};
use cantinho_db::pool::DEFAULT_MAX_CONNECTIONS;

/// Which document store the server opens at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!(
                "unknown STORE_BACKEND '{}' (expected 'postgres' or 'memory')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub max_upload_bytes: usize,
    /// `None` lets any origin through.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
            store_backend: StoreBackend::default(),
            database_url: None,
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable numbers fall back
    /// to their defaults; an unknown store backend is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_backend = match non_blank("STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => defaults.store_backend,
        };

        Ok(Self {
            host: non_blank("HOST").unwrap_or(defaults.host),
            port: parse_or(non_blank("PORT"), defaults.port),
            store_backend,
            database_url: non_blank("DATABASE_URL"),
            db_max_connections: parse_or(
                non_blank("DB_MAX_CONNECTIONS"),
                defaults.db_max_connections,
            ),
            max_upload_bytes: parse_or(non_blank("MAX_UPLOAD_BYTES"), defaults.max_upload_bytes),
            cors_allowed_origins: non_blank("CORS_ALLOWED_ORIGINS").map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid HOST/PORT: {}", e)))
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
