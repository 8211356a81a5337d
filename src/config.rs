use std::{env, path::PathBuf, str::FromStr};

use chrono::Duration;

use crate::auth::adapter::outgoing::security::argon2_hasher::{
    DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM,
};
use crate::auth::application::domain::entities::DEFAULT_SESSION_MAX_AGE_HOURS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
    Redis { url: String, key_prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub argon2: Argon2Config,
    /// Sessions older than this stop authenticating and get pruned.
    pub session_max_age: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Unknown STORE_BACKEND '{0}' (expected memory, file or redis)")]
    UnknownBackend(String),

    #[error("{0} must be set")]
    Missing(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let store = match var("STORE_BACKEND", "memory").to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File(PathBuf::from(var(
                "STORE_FILE_PATH",
                "data/site-state.json",
            ))),
            "redis" => StoreBackend::Redis {
                url: lookup("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?,
                key_prefix: var("REDIS_KEY_PREFIX", "agency:"),
            },
            other => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        let session_hours: i64 =
            parse(&lookup, "SESSION_MAX_AGE_HOURS", DEFAULT_SESSION_MAX_AGE_HOURS)?;
        let session_max_age = Duration::try_hours(session_hours)
            .filter(|_| session_hours > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "SESSION_MAX_AGE_HOURS",
                value: session_hours.to_string(),
            })?;

        Ok(Self {
            environment: var("RUST_ENV", "development"),
            host: var("HOST", "127.0.0.1"),
            port: parse(&lookup, "PORT", 8080)?,
            store,
            argon2: Argon2Config {
                memory_kib: parse(&lookup, "ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB)?,
                iterations: parse(&lookup, "ARGON2_ITERATIONS", DEFAULT_ITERATIONS)?,
                parallelism: parse(&lookup, "ARGON2_PARALLELISM", DEFAULT_PARALLELISM)?,
            },
            session_max_age,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}
