// ABOUTME: Recipe storage with ingredient lines and tags
// ABOUTME: Creation is transactional and validated; deletion cascades to carts and lines

use chrono::Utc;
use sqlx::Row;
use tracing::debug;

use super::{is_foreign_key_violation, map_conflict, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{NewRecipe, Recipe, RecipeId, RecipeIngredientLine, Tag};

impl Database {
    /// Create recipes, recipe_ingredients, and recipe_tags tables
    pub(super) async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                author_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                text TEXT NOT NULL,
                cooking_time INTEGER NOT NULL CHECK (cooking_time BETWEEN 1 AND 32000),
                pub_date DATETIME NOT NULL,
                UNIQUE (author_id, name)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id) ON DELETE CASCADE,
                amount INTEGER NOT NULL CHECK (amount >= 1),
                UNIQUE (recipe_id, ingredient_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_tags (
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
                PRIMARY KEY (recipe_id, tag_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe ON recipe_ingredients(recipe_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a recipe with its ingredient lines and tags in one transaction
    ///
    /// # Errors
    ///
    /// - validation errors from [`NewRecipe::validate`]
    /// - `ResourceAlreadyExists` if the author already has a recipe with this name
    /// - `ResourceNotFound` if the author, an ingredient, or a tag does not exist
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        recipe.validate()?;

        let mut tx = self.pool.begin().await?;

        let recipe_id: RecipeId = sqlx::query_scalar(
            r"
            INSERT INTO recipes (author_id, name, text, cooking_time, pub_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(recipe.author_id)
        .bind(&recipe.name)
        .bind(&recipe.text)
        .bind(recipe.cooking_time)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            missing_reference(e, || format!("User {}", recipe.author_id))
                .unwrap_or_else(|e| map_conflict(e, || format!("Recipe '{}'", recipe.name)))
        })?;

        for line in &recipe.ingredients {
            sqlx::query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
            )
            .bind(recipe_id)
            .bind(line.ingredient_id)
            .bind(line.amount)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                missing_reference(e, || format!("Ingredient {}", line.ingredient_id))
                    .unwrap_or_else(AppError::from)
            })?;
        }

        for tag_id in &recipe.tags {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
                .bind(recipe_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    missing_reference(e, || format!("Tag {tag_id}")).unwrap_or_else(AppError::from)
                })?;
        }

        tx.commit().await?;
        debug!(recipe_id, author_id = recipe.author_id, "Recipe created");

        self.get_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Recipe {recipe_id} vanished after insert")))
    }

    /// Get a recipe with its ingredient lines and tags
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get_recipe(&self, recipe_id: RecipeId) -> AppResult<Option<Recipe>> {
        let Some(row) = sqlx::query(
            "SELECT id, author_id, name, text, cooking_time, pub_date FROM recipes WHERE id = $1",
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let ingredients = sqlx::query(
            r"
            SELECT ri.ingredient_id, i.name, i.measurement_unit, ri.amount
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY ri.id
            ",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|line| -> AppResult<RecipeIngredientLine> {
            Ok(RecipeIngredientLine {
                ingredient_id: line.try_get("ingredient_id")?,
                name: line.try_get("name")?,
                measurement_unit: line.try_get("measurement_unit")?,
                amount: line.try_get("amount")?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

        let tags = sqlx::query(
            r"
            SELECT t.id, t.name, t.slug
            FROM recipe_tags rt
            JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = $1
            ORDER BY t.name
            ",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|tag| -> AppResult<Tag> {
            Ok(Tag {
                id: tag.try_get("id")?,
                name: tag.try_get("name")?,
                slug: tag.try_get("slug")?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

        Ok(Some(Recipe {
            id: row.try_get("id")?,
            author_id: row.try_get("author_id")?,
            name: row.try_get("name")?,
            text: row.try_get("text")?,
            cooking_time: row.try_get("cooking_time")?,
            pub_date: row.try_get("pub_date")?,
            ingredients,
            tags,
        }))
    }

    /// Check whether a recipe id is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn recipe_exists(&self, recipe_id: RecipeId) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
            .bind(recipe_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Delete a recipe; its lines, tags, and cart entries go with it
    ///
    /// Returns `false` if there was no such recipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn delete_recipe(&self, recipe_id: RecipeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Turn a foreign key violation into `ResourceNotFound`, handing any other
/// error back to the caller
fn missing_reference(
    error: sqlx::Error,
    resource: impl FnOnce() -> String,
) -> Result<AppError, sqlx::Error> {
    if is_foreign_key_violation(&error) {
        Ok(AppError::not_found(resource()))
    } else {
        Err(error)
    }
}
