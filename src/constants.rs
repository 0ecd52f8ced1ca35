// ABOUTME: System-wide constants and configuration defaults for the Foodgram API
// ABOUTME: Environment variable names, default values, route paths, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! # Constants Module
//!
//! Defaults used when an environment variable is absent, and the route paths
//! shared by the router, the binaries, and the tests.

pub use foodgram_core::constants::{recipes, shopping_list, short_links};

/// Environment variable names read by [`crate::config::environment::ServerConfig`]
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Public base URL used to build absolute short links
    pub const BASE_URL: &str = "BASE_URL";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Connection pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Run migrations at startup
    pub const AUTO_MIGRATE: &str = "AUTO_MIGRATE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Allowed CORS origins, comma separated or `*`
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Header carrying the caller's user id
    pub const USER_ID_HEADER: &str = "USER_ID_HEADER";
    /// Minimum short link token length
    pub const SHORT_LINK_MIN_LENGTH: &str = "SHORT_LINK_MIN_LENGTH";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default listen address
    pub const HOST: &str = "0.0.0.0";
    /// Default public base URL
    pub const BASE_URL: &str = "http://localhost:8000";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/foodgram.db";
    /// Default connection pool size
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Default caller identity header
    pub const USER_ID_HEADER: &str = "x-user-id";
    /// Default request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Longest accepted minimum short link length
    pub const MAX_SHORT_LINK_MIN_LENGTH: usize = 16;
    /// Directory the CSV fixtures are read from
    pub const DATA_DIR: &str = "./data";
}

/// Route paths
pub mod routes {
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
    /// Front-end recipe page the short links resolve to
    pub const RECIPE_PAGE_PREFIX: &str = "/recipes";
}

/// Service names for structured logging
pub mod service_names {
    /// This service
    pub const FOODGRAM_API: &str = "foodgram-api";
}

/// Request correlation
pub mod headers {
    /// Request id header, generated when the client does not send one
    pub const REQUEST_ID: &str = "x-request-id";
}
