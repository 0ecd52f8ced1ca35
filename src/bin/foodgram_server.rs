// ABOUTME: HTTP server binary for the Foodgram API
// ABOUTME: Loads configuration, opens the database, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! # Foodgram API Server Binary
//!
//! ```bash
//! foodgram-server
//! foodgram-server --http-port 9000 --database-url sqlite:./data/dev.db
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use foodgram_api::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "foodgram-server")]
#[command(about = "Foodgram API - shopping lists and short links for recipes")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url).context("Invalid --database-url")?;
    }
    config.validate()?;
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!(url = %config.database.url, "Database ready");

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    if let Err(e) = server::run(resources).await {
        error!(error = %e, "Server error");
        return Err(e);
    }

    Ok(())
}
