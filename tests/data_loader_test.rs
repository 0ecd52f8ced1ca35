// ABOUTME: Integration tests for loading ingredient and tag fixture files
// ABOUTME: Uses temporary directories and an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;

use foodgram_api::database::InsertSummary;
use foodgram_api::services::data_loader::{INGREDIENTS_FILE, TAGS_FILE};
use foodgram_api::services::{DataLoader, FileOutcome};
use tempfile::TempDir;

use common::create_test_database;

const INGREDIENTS: &str = "\
абрикосовое варенье,г
Flour,g
Sugar,g
\"Salt, coarse\",g
";

const TAGS: &str = "\
Breakfast,breakfast
Lunch,lunch
Dinner,dinner
";

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), INGREDIENTS_FILE, INGREDIENTS);
    write_fixture(dir.path(), TAGS_FILE, TAGS);
    dir
}

#[tokio::test]
async fn test_loads_both_files() {
    let db = create_test_database().await.unwrap();
    let dir = fixture_dir();

    let report = DataLoader::new(&db).load_dir(dir.path()).await;

    assert!(report.is_complete());
    assert_eq!(
        report.ingredients,
        FileOutcome::Loaded(InsertSummary {
            inserted: 4,
            skipped: 0
        })
    );
    assert_eq!(
        report.tags,
        FileOutcome::Loaded(InsertSummary {
            inserted: 3,
            skipped: 0
        })
    );
    assert_eq!(db.get_ingredient_count().await.unwrap(), 4);
    assert_eq!(db.get_tag_count().await.unwrap(), 3);

    let salt = db.find_ingredient("Salt, coarse", "g").await.unwrap();
    assert!(salt.is_some());
}

#[tokio::test]
async fn test_second_load_skips_everything() {
    let db = create_test_database().await.unwrap();
    let dir = fixture_dir();
    let loader = DataLoader::new(&db);

    loader.load_dir(dir.path()).await;
    let report = loader.load_dir(dir.path()).await;

    assert_eq!(
        report.ingredients,
        FileOutcome::Loaded(InsertSummary {
            inserted: 0,
            skipped: 4
        })
    );
    assert_eq!(
        report.tags,
        FileOutcome::Loaded(InsertSummary {
            inserted: 0,
            skipped: 3
        })
    );
    assert_eq!(db.get_ingredient_count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_same_name_with_new_unit_is_new_ingredient() {
    let db = create_test_database().await.unwrap();
    let dir = fixture_dir();
    let loader = DataLoader::new(&db);
    loader.load_dir(dir.path()).await;

    write_fixture(dir.path(), INGREDIENTS_FILE, "Flour,g\nFlour,cup\n");
    let outcome = loader
        .load_ingredients(&dir.path().join(INGREDIENTS_FILE))
        .await;

    assert_eq!(
        outcome,
        FileOutcome::Loaded(InsertSummary {
            inserted: 1,
            skipped: 1
        })
    );
}

#[tokio::test]
async fn test_missing_file_does_not_stop_the_other() {
    let db = create_test_database().await.unwrap();
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), TAGS_FILE, TAGS);

    let report = DataLoader::new(&db).load_dir(dir.path()).await;

    assert!(!report.is_complete());
    assert!(matches!(report.ingredients, FileOutcome::Failed { .. }));
    assert!(report.tags.is_loaded());
    assert_eq!(db.get_ingredient_count().await.unwrap(), 0);
    assert_eq!(db.get_tag_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_malformed_file_writes_nothing() {
    let db = create_test_database().await.unwrap();
    let dir = fixture_dir();
    write_fixture(dir.path(), INGREDIENTS_FILE, "Flour,g\nSugar\nSalt,g\n");

    let report = DataLoader::new(&db).load_dir(dir.path()).await;

    match &report.ingredients {
        FileOutcome::Failed { error } => assert!(error.contains("Line 2"), "{error}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(db.get_ingredient_count().await.unwrap(), 0);
    assert!(report.tags.is_loaded());
}

#[tokio::test]
async fn test_report_serializes_with_status() {
    let db = create_test_database().await.unwrap();
    let dir = TempDir::new().unwrap();

    let report = DataLoader::new(&db).load_dir(dir.path()).await;
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ingredients"]["status"], "failed");
    assert!(json["tags"]["error"].is_string());
}
