// ABOUTME: Main library entry point for the Foodgram recipe API
// ABOUTME: Shopping list downloads and recipe short links over axum and SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

#![deny(unsafe_code)]

//! # Foodgram API
//!
//! Backend core of a recipe-sharing service. Users publish recipes and keep a
//! shopping cart of recipes; this crate serves:
//!
//! - **Shopping list**: every ingredient of every recipe in the caller's cart,
//!   grouped by `(name, unit)`, summed, sorted, and downloaded as text
//! - **Short links**: reversible `/s/<token>/` links to recipe pages
//!
//! ## Architecture
//!
//! - **Config**: typed configuration from environment variables
//! - **Database**: SQLite storage via sqlx, migrations on startup
//! - **Services**: shopping list aggregation and CSV reference data loading
//! - **Routes**: axum route groups sharing [`resources::ServerResources`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use foodgram_api::config::ServerConfig;
//! use foodgram_api::database::Database;
//! use foodgram_api::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
//!     foodgram_api::server::run(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Route paths, environment variable names, and defaults
pub mod constants;

/// SQLite storage
pub mod database;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Shared state for request handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Shopping list and data loading services
pub mod services;

pub use foodgram_core::short_link;
