// ABOUTME: Ingredient and tag reference data operations
// ABOUTME: Single-row creation plus idempotent bulk inserts used by the CSV loader

use serde::Serialize;
use sqlx::Row;

use super::{map_conflict, Database};
use crate::errors::AppResult;
use crate::models::{Ingredient, NewIngredient, NewTag, Tag};

/// Outcome of a bulk insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsertSummary {
    /// Rows written
    pub inserted: u64,
    /// Rows already present and left untouched
    pub skipped: u64,
}

impl Database {
    /// Create the ingredients and tags tables
    pub(super) async fn migrate_reference(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                measurement_unit TEXT NOT NULL,
                UNIQUE (name, measurement_unit)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                slug TEXT UNIQUE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create an ingredient
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or overlong fields and
    /// `ResourceAlreadyExists` if the `(name, unit)` pair is taken
    pub async fn create_ingredient(&self, ingredient: &NewIngredient) -> AppResult<Ingredient> {
        ingredient.validate()?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) RETURNING id",
        )
        .bind(&ingredient.name)
        .bind(&ingredient.measurement_unit)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_conflict(e, || {
                format!(
                    "Ingredient '{}' ({})",
                    ingredient.name, ingredient.measurement_unit
                )
            })
        })?;

        Ok(Ingredient {
            id,
            name: ingredient.name.clone(),
            measurement_unit: ingredient.measurement_unit.clone(),
        })
    }

    /// Create a tag
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad name or slug and
    /// `ResourceAlreadyExists` if either is taken
    pub async fn create_tag(&self, tag: &NewTag) -> AppResult<Tag> {
        tag.validate()?;

        let id: i64 =
            sqlx::query_scalar("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id")
                .bind(&tag.name)
                .bind(&tag.slug)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_conflict(e, || format!("Tag '{}'", tag.slug)))?;

        Ok(Tag {
            id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        })
    }

    /// Insert ingredients, skipping `(name, unit)` pairs already stored
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails; nothing is written then
    pub async fn insert_ingredients(&self, ingredients: &[NewIngredient]) -> AppResult<InsertSummary> {
        let mut tx = self.pool.begin().await?;
        let mut summary = InsertSummary::default();

        for ingredient in ingredients {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO ingredients (name, measurement_unit) VALUES ($1, $2)",
            )
            .bind(&ingredient.name)
            .bind(&ingredient.measurement_unit)
            .execute(&mut *tx)
            .await?;
            tally(&mut summary, result.rows_affected());
        }

        tx.commit().await?;
        Ok(summary)
    }

    /// Insert tags, skipping names or slugs already stored
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails; nothing is written then
    pub async fn insert_tags(&self, tags: &[NewTag]) -> AppResult<InsertSummary> {
        let mut tx = self.pool.begin().await?;
        let mut summary = InsertSummary::default();

        for tag in tags {
            let result = sqlx::query("INSERT OR IGNORE INTO tags (name, slug) VALUES ($1, $2)")
                .bind(&tag.name)
                .bind(&tag.slug)
                .execute(&mut *tx)
                .await?;
            tally(&mut summary, result.rows_affected());
        }

        tx.commit().await?;
        Ok(summary)
    }

    /// Look up an ingredient by its `(name, unit)` pair
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query(
            "SELECT id, name, measurement_unit FROM ingredients WHERE name = $1 AND measurement_unit = $2",
        )
        .bind(name)
        .bind(measurement_unit)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> AppResult<Ingredient> {
            Ok(Ingredient {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                measurement_unit: row.try_get("measurement_unit")?,
            })
        })
        .transpose()
    }

    /// Number of stored ingredients
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_ingredient_count(&self) -> AppResult<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(&self.pool)
            .await?)
    }

    /// Number of stored tags
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_tag_count(&self) -> AppResult<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await?)
    }
}

fn tally(summary: &mut InsertSummary, rows_affected: u64) {
    if rows_affected == 0 {
        summary.skipped += 1;
    } else {
        summary.inserted += rows_affected;
    }
}
