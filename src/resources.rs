// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles the database, configuration, and short link codec behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use std::sync::Arc;

use foodgram_core::short_link::ShortLinkCodec;

use crate::config::ServerConfig;
use crate::constants::short_links::PATH_PREFIX;
use crate::database::Database;

/// Immutable state shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Connection pool
    pub database: Database,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Recipe id to token codec
    pub short_links: ShortLinkCodec,
}

impl ServerResources {
    /// Assemble resources from an open database and loaded configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let short_links = ShortLinkCodec::with_min_length(config.short_link.min_length);
        Self {
            database,
            config,
            short_links,
        }
    }

    /// Absolute short link for a token, `<base_url>/s/<token>/`
    #[must_use]
    pub fn short_link_url(&self, token: &str) -> String {
        format!("{}{PATH_PREFIX}/{token}/", self.config.base_url)
    }
}
