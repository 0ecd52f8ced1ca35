// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Environment-based configuration management

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{defaults, env_vars, short_links};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string, falling back to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string, falling back to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory SQLite, used by tests
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:` and a bare file path.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty string or a non-SQLite scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Database URL must not be empty"));
        }

        if let Some(path) = trimmed.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if path == ":memory:" || path.is_empty() {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path),
            });
        }

        if trimmed.contains("://") {
            return Err(anyhow!("Unsupported database URL scheme: {trimmed}"));
        }

        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/foodgram.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Connection pool size
    pub max_connections: u32,
    /// Run migrations at startup
    pub auto_migrate: bool,
}

/// Request-facing security settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed CORS origins, `["*"]` for any
    pub cors_origins: Vec<String>,
    /// Header the gateway uses to forward the authenticated user id
    pub user_id_header: String,
}

/// Short link settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShortLinkConfig {
    /// Tokens are padded to at least this many characters
    pub min_length: usize,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Listen address
    pub host: String,
    /// Public base URL, without a trailing slash
    pub base_url: String,
    /// Base log level from `LOG_LEVEL`; a `RUST_LOG` directive still wins in the subscriber
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Short link configuration
    pub short_link: ShortLinkConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value that cannot be parsed or
    /// the resulting configuration fails [`Self::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env_var_or(env_vars::HOST, defaults::HOST),
            base_url: env_var_or(env_vars::BASE_URL, defaults::BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::LOG_LEVEL, "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),

            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_vars::DATABASE_URL,
                    defaults::DATABASE_URL,
                ))
                .context("Invalid DATABASE_URL value")?,
                max_connections: parse_env(
                    env_vars::DATABASE_MAX_CONNECTIONS,
                    defaults::DATABASE_MAX_CONNECTIONS,
                )?,
                auto_migrate: parse_env(env_vars::AUTO_MIGRATE, true)?,
            },

            security: SecurityConfig {
                cors_origins: parse_origins(&env_var_or(env_vars::CORS_ORIGINS, "*")),
                user_id_header: env_var_or(env_vars::USER_ID_HEADER, defaults::USER_ID_HEADER)
                    .to_lowercase(),
            },

            short_link: ShortLinkConfig {
                min_length: parse_env(
                    env_vars::SHORT_LINK_MIN_LENGTH,
                    short_links::DEFAULT_MIN_LENGTH,
                )?,
            },

            request_timeout_secs: parse_env(
                env_vars::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            )?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for tests: in-memory database, defaults elsewhere
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: "127.0.0.1".to_owned(),
            base_url: defaults::BASE_URL.to_owned(),
            log_level: LogLevel::Warn,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                max_connections: 1,
                auto_migrate: true,
            },
            security: SecurityConfig {
                cors_origins: vec!["*".to_owned()],
                user_id_header: defaults::USER_ID_HEADER.to_owned(),
            },
            short_link: ShortLinkConfig {
                min_length: short_links::DEFAULT_MIN_LENGTH,
            },
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, an empty pool, a zero timeout,
    /// a base URL without an http(s) scheme, an invalid header name, or an
    /// oversized short link length
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be greater than 0"));
        }
        if self.database.max_connections == 0 {
            return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be greater than 0"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than 0"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow!(
                "BASE_URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        http::HeaderName::from_bytes(self.security.user_id_header.as_bytes())
            .with_context(|| {
                format!(
                    "USER_ID_HEADER '{}' is not a valid header name",
                    self.security.user_id_header
                )
            })?;
        if self.short_link.min_length > defaults::MAX_SHORT_LINK_MIN_LENGTH {
            return Err(anyhow!(
                "SHORT_LINK_MIN_LENGTH must be at most {}",
                defaults::MAX_SHORT_LINK_MIN_LENGTH
            ));
        }

        if self.environment.is_production() && self.security.cors_origins.iter().any(|o| o == "*")
        {
            warn!("CORS allows any origin in production");
        }
        if self.environment.is_production() && self.database.url.is_memory() {
            warn!("Production is running on an in-memory database; data will not persist");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Foodgram API Configuration:\n\
             - Environment: {}\n\
             - Listen: {}:{}\n\
             - Base URL: {}\n\
             - Log Level: {}\n\
             - Database: {} (pool {}, auto-migrate {})\n\
             - CORS Origins: {}\n\
             - User Id Header: {}\n\
             - Short Link Min Length: {}\n\
             - Request Timeout: {}s",
            self.environment,
            self.host,
            self.http_port,
            self.base_url,
            self.log_level,
            if self.database.url.is_memory() {
                "SQLite (memory)"
            } else {
                "SQLite"
            },
            self.database.max_connections,
            self.database.auto_migrate,
            self.security.cors_origins.join(","),
            self.security.user_id_header,
            self.short_link.min_length,
            self.request_timeout_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
