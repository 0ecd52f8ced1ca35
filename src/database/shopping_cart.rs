// ABOUTME: Shopping cart entries and the cart-wide ingredient line query
// ABOUTME: Implements ShoppingCartSource so the shopping list reads straight from SQLite

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use super::{is_foreign_key_violation, map_conflict, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{IngredientLine, RecipeId, ShoppingCartEntry, UserId};
use crate::services::shopping_list::ShoppingCartSource;

impl Database {
    /// Create the shopping_carts table
    pub(super) async fn migrate_shopping_cart(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shopping_carts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                added_at DATETIME NOT NULL,
                UNIQUE (user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_shopping_carts_user ON shopping_carts(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Put a recipe in a user's cart
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the recipe is already in the cart
    /// and `ResourceNotFound` if the user or recipe does not exist
    pub async fn add_to_shopping_cart(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> AppResult<ShoppingCartEntry> {
        let added_at = Utc::now();
        sqlx::query("INSERT INTO shopping_carts (user_id, recipe_id, added_at) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(recipe_id)
            .bind(added_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::not_found(format!("User {user_id} or recipe {recipe_id}"))
                } else {
                    map_conflict(e, || format!("Recipe {recipe_id} in the shopping cart"))
                }
            })?;

        Ok(ShoppingCartEntry {
            user_id,
            recipe_id,
            added_at,
        })
    }

    /// Take a recipe out of a user's cart
    ///
    /// Returns `false` if the recipe was not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn remove_from_shopping_cart(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM shopping_carts WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a recipe is in a user's cart
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn is_in_shopping_cart(&self, user_id: UserId, recipe_id: RecipeId) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM shopping_carts WHERE user_id = $1 AND recipe_id = $2)",
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Cart entries of a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_shopping_cart(&self, user_id: UserId) -> AppResult<Vec<ShoppingCartEntry>> {
        sqlx::query(
            "SELECT user_id, recipe_id, added_at FROM shopping_carts WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| -> AppResult<ShoppingCartEntry> {
            Ok(ShoppingCartEntry {
                user_id: row.try_get("user_id")?,
                recipe_id: row.try_get("recipe_id")?,
                added_at: row.try_get("added_at")?,
            })
        })
        .collect()
    }
}

#[async_trait]
impl ShoppingCartSource for Database {
    async fn cart_ingredient_lines(&self, user_id: UserId) -> AppResult<Vec<IngredientLine>> {
        sqlx::query(
            r"
            SELECT i.name, i.measurement_unit, ri.amount
            FROM shopping_carts sc
            JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE sc.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|row| -> AppResult<IngredientLine> {
            Ok(IngredientLine {
                name: row.try_get("name")?,
                measurement_unit: row.try_get("measurement_unit")?,
                amount: row.try_get("amount")?,
            })
        })
        .collect()
    }
}
