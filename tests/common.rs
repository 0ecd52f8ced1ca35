// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory database, server resources, and recipe fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `foodgram_api`

use std::sync::{Arc, Once};

use anyhow::Result;
use foodgram_api::{
    config::ServerConfig,
    database::Database,
    models::{Ingredient, NewIngredient, NewRecipe, NewRecipeIngredient, NewUser, Recipe, User},
    resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::in_memory().await
}

/// Server resources over the given database with test configuration
pub fn create_test_resources(database: Database) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        database,
        Arc::new(ServerConfig::for_testing()),
    ))
}

/// Create a user named `username`
pub async fn create_test_user(database: &Database, username: &str) -> User {
    database
        .create_user(&NewUser::new(username, format!("{username}@example.com")))
        .await
        .expect("Failed to create user")
}

/// Create an ingredient, or return the stored one
pub async fn ingredient(database: &Database, name: &str, unit: &str) -> Ingredient {
    if let Some(existing) = database.find_ingredient(name, unit).await.unwrap() {
        return existing;
    }
    database
        .create_ingredient(&NewIngredient::new(name, unit))
        .await
        .expect("Failed to create ingredient")
}

/// Create a recipe from `(ingredient, amount)` pairs
pub async fn create_test_recipe(
    database: &Database,
    author: &User,
    name: &str,
    lines: &[(&Ingredient, u32)],
) -> Recipe {
    database
        .create_recipe(&NewRecipe {
            author_id: author.id,
            name: name.to_owned(),
            text: format!("How to make {name}"),
            cooking_time: 30,
            ingredients: lines
                .iter()
                .map(|(ingredient, amount)| NewRecipeIngredient {
                    ingredient_id: ingredient.id,
                    amount: *amount,
                })
                .collect(),
            tags: Vec::new(),
        })
        .await
        .expect("Failed to create recipe")
}

/// The two-recipe cart used across tests
///
/// Recipe A: Flour 200 g, Sugar 50 g. Recipe B: Flour 300 g, Salt 5 g.
pub struct BakingCart {
    /// Cart owner
    pub user: User,
    /// Flour and sugar
    pub recipe_a: Recipe,
    /// Flour and salt
    pub recipe_b: Recipe,
}

/// Expected shopping list for [`BakingCart`]
pub const BAKING_LIST: &str = "Flour, 500, g\nSalt, 5, g\nSugar, 50, g\n";

/// Create [`BakingCart`] with both recipes in the user's cart
pub async fn create_baking_cart(database: &Database) -> BakingCart {
    let user = create_test_user(database, "baker").await;
    let flour = ingredient(database, "Flour", "g").await;
    let sugar = ingredient(database, "Sugar", "g").await;
    let salt = ingredient(database, "Salt", "g").await;

    let recipe_a = create_test_recipe(database, &user, "Shortbread", &[(&flour, 200), (&sugar, 50)]).await;
    let recipe_b = create_test_recipe(database, &user, "Flatbread", &[(&flour, 300), (&salt, 5)]).await;

    database.add_to_shopping_cart(user.id, recipe_a.id).await.unwrap();
    database.add_to_shopping_cart(user.id, recipe_b.id).await.unwrap();

    BakingCart {
        user,
        recipe_a,
        recipe_b,
    }
}
