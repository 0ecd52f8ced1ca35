// ABOUTME: Reference data loader for ingredients and tags from CSV fixtures
// ABOUTME: Idempotent: rows already present are skipped and counted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Reference data loader.
//!
//! Reads `ingredients.csv` (`name,measurement_unit`) and `tags.csv`
//! (`name,slug`) from the data directory. Neither file has a header row.
//!
//! Usage:
//! ```bash
//! # Load ./data/*.csv into the configured database
//! cargo run --bin load-data
//!
//! # Custom directory and database
//! cargo run --bin load-data -- --data-dir ./fixtures --database-url sqlite:./data/dev.db
//!
//! # Verbose output
//! cargo run --bin load-data -- -v
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use foodgram_api::{
    config::{DatabaseConfig, DatabaseUrl},
    constants::{defaults, env_vars},
    database::Database,
    services::data_loader::{DataLoader, FileOutcome, INGREDIENTS_FILE, TAGS_FILE},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "load-data",
    about = "Foodgram reference data loader",
    long_about = "Load ingredients and tags from headerless CSV files"
)]
struct LoadArgs {
    /// Directory holding ingredients.csv and tags.csv
    #[arg(long, default_value = defaults::DATA_DIR)]
    data_dir: PathBuf,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = LoadArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Foodgram Reference Data Loader ===");

    let database_url = args
        .database_url
        .or_else(|| env::var(env_vars::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
    let database = Database::new(&DatabaseConfig {
        url: DatabaseUrl::parse_url(&database_url).context("Invalid database URL")?,
        max_connections: 1,
        auto_migrate: true,
    })
    .await?;

    let report = DataLoader::new(&database).load_dir(&args.data_dir).await;

    for (file, outcome) in [
        (INGREDIENTS_FILE, &report.ingredients),
        (TAGS_FILE, &report.tags),
    ] {
        match outcome {
            FileOutcome::Loaded(summary) => println!(
                "{file}: {} inserted, {} already present",
                summary.inserted, summary.skipped
            ),
            FileOutcome::Failed { error } => eprintln!("{file}: not loaded: {error}"),
        }
    }

    if !report.is_complete() {
        bail!("Some fixture files were not loaded");
    }
    println!("Data loading complete");
    Ok(())
}
