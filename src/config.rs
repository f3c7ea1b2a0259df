//! Process configuration loaded from environment variables.
//!
//! Blank values fall back to their defaults; values that are present but do
//! not parse are reported as [`ConfigError`] rather than silently ignored.

use crate::board::services::{BoardLimits, DEFAULT_MAX_PROJECTS, DEFAULT_MAX_TASKS};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Environment variable name.
        key: &'static str,
        /// Raw value that failed to parse.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// `PostgreSQL` via diesel.
    #[default]
    Postgres,
    /// Process-local in-memory store.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; overrides the individual parts when set.
    pub url: Option<String>,
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub name: String,
    /// Login role.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Maximum pooled connections.
    pub pool_max_size: u32,
}

impl DatabaseConfig {
    /// Returns the connection URL, assembling it from parts when no explicit
    /// URL was configured.
    #[must_use]
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        if self.password.is_empty() {
            format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            )
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            )
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Selected storage backend.
    pub storage: StorageBackend,
    /// Database settings, used when `storage` is [`StorageBackend::Postgres`].
    pub database: DatabaseConfig,
    /// Project and task caps.
    pub limits: BoardLimits,
    /// Interval between autoclose passes in seconds (default: `60`).
    pub autoclose_interval_secs: u64,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `8000`      |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `STORAGE_BACKEND`         | `postgres`  |
    /// | `DATABASE_URL`            | unset       |
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `5432`      |
    /// | `DB_NAME`                 | `todo_app`  |
    /// | `DB_USER`                 | `postgres`  |
    /// | `DB_PASSWORD`             | empty       |
    /// | `DB_POOL_MAX_SIZE`        | `10`        |
    /// | `MAX_NUMBER_OF_PROJECT`   | `10`        |
    /// | `MAX_NUMBER_OF_TASK`      | `100`       |
    /// | `AUTOCLOSE_INTERVAL_SECS` | `60`        |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed, or
    /// when a timeout, interval or pool size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed, or
    /// when a timeout, interval or pool size is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Lookup(lookup);

        let server = ServerConfig {
            host: env.string("HOST", "0.0.0.0"),
            port: env.parsed("PORT", 8000)?,
            request_timeout_secs: env.positive("REQUEST_TIMEOUT_SECS", 30)?,
        };

        let database = DatabaseConfig {
            url: env.optional("DATABASE_URL"),
            host: env.string("DB_HOST", "localhost"),
            port: env.parsed("DB_PORT", 5432)?,
            name: env.string("DB_NAME", "todo_app"),
            user: env.string("DB_USER", "postgres"),
            password: env.string("DB_PASSWORD", ""),
            pool_max_size: env.positive("DB_POOL_MAX_SIZE", 10)?,
        };

        let limits = BoardLimits::new(
            env.parsed("MAX_NUMBER_OF_PROJECT", DEFAULT_MAX_PROJECTS)?,
            env.parsed("MAX_NUMBER_OF_TASK", DEFAULT_MAX_TASKS)?,
        );

        Ok(Self {
            server,
            storage: env.parsed("STORAGE_BACKEND", StorageBackend::default())?,
            database,
            limits,
            autoclose_interval_secs: env.positive("AUTOCLOSE_INTERVAL_SECS", 60)?,
        })
    }

    /// Returns the autoclose interval as a [`Duration`].
    #[must_use]
    pub const fn autoclose_interval(&self) -> Duration {
        Duration::from_secs(self.autoclose_interval_secs)
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_owned())
    }

    fn parsed<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };
        raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        })
    }

    fn positive<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + PartialEq + From<u8>,
        T::Err: fmt::Display,
    {
        let value = self.parsed(key, default)?;
        if value == T::from(0) {
            return Err(ConfigError::Invalid {
                key,
                value: self.optional(key).unwrap_or_default(),
                reason: "must be greater than zero".to_owned(),
            });
        }
        Ok(value)
    }
}
