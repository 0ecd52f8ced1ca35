// ABOUTME: SQLite database manager owning the connection pool and schema migrations
// ABOUTME: Domain operations live in sibling modules as inherent impls on Database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! # Database Management
//!
//! Storage for users, reference data (ingredients and tags), recipes, and
//! shopping carts. Foreign keys are enforced so deleting a recipe removes its
//! ingredient lines, tags, and cart entries.

mod recipes;
mod reference;
mod shopping_cart;
mod users;

pub use reference::InsertSummary;

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, ErrorCode};

/// Database manager for recipes, reference data, and shopping carts
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database described by `config`, running migrations when
    /// `auto_migrate` is set
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created, the
    /// connection fails, or a migration fails
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .context("Invalid database URL")?
            .create_if_missing(true)
            .foreign_keys(true);

        // every in-memory connection is a separate database
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {}", config.url))?;
        info!(url = %config.url, "Database connection established");

        let db = Self { pool };
        if config.auto_migrate {
            db.migrate().await?;
        }
        Ok(db)
    }

    /// In-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 1,
            auto_migrate: true,
        })
        .await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await.context("users migration")?;
        self.migrate_reference().await.context("reference data migration")?;
        self.migrate_recipes().await.context("recipes migration")?;
        self.migrate_shopping_cart()
            .await
            .context("shopping cart migration")?;
        debug!("Database migrations applied");
        Ok(())
    }

    /// Check the connection with a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Replace a unique-violation message from the driver with a domain one
fn map_conflict(error: sqlx::Error, resource: impl FnOnce() -> String) -> AppError {
    let mapped = AppError::from(error);
    if mapped.code == ErrorCode::ResourceAlreadyExists {
        AppError::already_exists(resource())
    } else {
        mapped
    }
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
