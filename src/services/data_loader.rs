// ABOUTME: Bulk loader for ingredient and tag reference data from headerless CSV files
// ABOUTME: Parses with the csv crate, validates rows, inserts idempotently, reports per-file outcomes

//! Reference data loader
//!
//! `ingredients.csv` holds `name,measurement_unit` rows and `tags.csv` holds
//! `name,slug` rows, neither with a header line. Rows already stored are
//! skipped, so loading twice is harmless. A file that is missing or malformed
//! is reported and does not stop the other file from loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{info, warn};

use crate::database::{Database, InsertSummary};
use crate::errors::{AppError, AppResult};
use crate::models::{NewIngredient, NewTag};

/// Ingredient fixture file name
pub const INGREDIENTS_FILE: &str = "ingredients.csv";
/// Tag fixture file name
pub const TAGS_FILE: &str = "tags.csv";

/// What happened to one fixture file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Parsed and written
    Loaded(InsertSummary),
    /// Not loaded; nothing from this file was written
    Failed {
        /// Why the file was rejected
        error: String,
    },
}

impl FileOutcome {
    fn from_result(result: AppResult<InsertSummary>) -> Self {
        match result {
            Ok(summary) => Self::Loaded(summary),
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }

    /// True if the file was written
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Outcome of loading both fixture files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// `ingredients.csv`
    pub ingredients: FileOutcome,
    /// `tags.csv`
    pub tags: FileOutcome,
}

impl LoadReport {
    /// True if both files were written
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.ingredients.is_loaded() && self.tags.is_loaded()
    }
}

/// Parse `name,measurement_unit` rows
///
/// # Errors
///
/// Returns `InvalidFormat` for unreadable CSV or a row without two fields and
/// a validation error for an empty or overlong field; the message names the
/// offending line
pub fn read_ingredients<R: Read>(reader: R) -> AppResult<Vec<NewIngredient>> {
    read_pairs(reader, |name, unit| {
        let ingredient = NewIngredient::new(name, unit);
        ingredient.validate()?;
        Ok(ingredient)
    })
}

/// Parse `name,slug` rows
///
/// # Errors
///
/// Same rules as [`read_ingredients`], plus slug charset validation
pub fn read_tags<R: Read>(reader: R) -> AppResult<Vec<NewTag>> {
    read_pairs(reader, |name, slug| {
        let tag = NewTag {
            name: name.to_owned(),
            slug: slug.to_owned(),
        };
        tag.validate()?;
        Ok(tag)
    })
}

fn read_pairs<R, T, F>(reader: R, mut build: F) -> AppResult<Vec<T>>
where
    R: Read,
    F: FnMut(&str, &str) -> AppResult<T>,
{
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let more = csv.read_record(&mut record).map_err(|e| {
            AppError::invalid_format(format!("Failed to read CSV: {e}")).with_source(e)
        })?;
        if !more {
            break;
        }
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(str::is_empty) {
            continue;
        }
        let (Some(first), Some(second)) = (record.get(0), record.get(1)) else {
            return Err(AppError::invalid_format(format!(
                "Line {line}: expected 2 fields, found {}",
                record.len()
            )));
        };

        let item = build(first, second).map_err(|e| {
            let message = format!("Line {line}: {}", e.message);
            AppError::new(e.code, message)
        })?;
        items.push(item);
    }

    Ok(items)
}

/// Loads the fixture files of a directory into the database
pub struct DataLoader<'a> {
    database: &'a Database,
}

impl<'a> DataLoader<'a> {
    /// Loader writing into `database`
    #[must_use]
    pub const fn new(database: &'a Database) -> Self {
        Self { database }
    }

    /// Load `ingredients.csv` and `tags.csv` from `data_dir`
    ///
    /// Each file is handled on its own; failures end up in the report.
    pub async fn load_dir(&self, data_dir: &Path) -> LoadReport {
        let ingredients = self.load_ingredients(&data_dir.join(INGREDIENTS_FILE)).await;
        log_outcome(INGREDIENTS_FILE, &ingredients);

        let tags = self.load_tags(&data_dir.join(TAGS_FILE)).await;
        log_outcome(TAGS_FILE, &tags);

        LoadReport { ingredients, tags }
    }

    /// Load one ingredient file
    pub async fn load_ingredients(&self, path: &Path) -> FileOutcome {
        let result = match open(path).and_then(read_ingredients) {
            Ok(rows) => self.database.insert_ingredients(&rows).await,
            Err(e) => Err(e),
        };
        FileOutcome::from_result(result)
    }

    /// Load one tag file
    pub async fn load_tags(&self, path: &Path) -> FileOutcome {
        let result = match open(path).and_then(read_tags) {
            Ok(rows) => self.database.insert_tags(&rows).await,
            Err(e) => Err(e),
        };
        FileOutcome::from_result(result)
    }
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot open {}: {e}", path.display())).with_source(e)
    })
}

fn log_outcome(file: &str, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Loaded(summary) => info!(
            file,
            inserted = summary.inserted,
            skipped = summary.skipped,
            "Fixture file loaded"
        ),
        FileOutcome::Failed { error } => warn!(file, %error, "Fixture file not loaded"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_reads_headerless_pairs() {
        let data = "абрикосовое варенье,г\nsalt, g \n\n";
        let rows = read_ingredients(data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                NewIngredient::new("абрикосовое варенье", "г"),
                NewIngredient::new("salt", "g"),
            ]
        );
    }

    #[test]
    fn test_quoted_commas_survive() {
        let rows = read_ingredients("\"salt, coarse\",g\n".as_bytes()).unwrap();
        assert_eq!(rows[0].name, "salt, coarse");
    }

    #[test]
    fn test_short_row_names_line() {
        let err = read_tags("Breakfast,breakfast\nLunch\n".as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.starts_with("Line 2"), "{}", err.message);
    }

    #[test]
    fn test_bad_slug_rejected() {
        let err = read_tags("Dinner,din ner\n".as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
