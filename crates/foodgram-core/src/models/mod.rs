// ABOUTME: Core data models for the Foodgram recipe API
// ABOUTME: Re-exports users, recipes, ingredients, tags, and shopping cart types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! # Data Models
//!
//! Plain data carried between the store, the services, and the HTTP layer.
//! Identifiers are the positive integers assigned by the database.
//!
//! - `User`: minimal account record owning recipes and a shopping cart
//! - `Recipe`: a published recipe with ordered ingredient lines and tags
//! - `Ingredient` / `Tag`: reference data loaded from CSV fixtures
//! - `IngredientLine` / `ShoppingListRow`: input and output of the shopping list

mod recipe;
mod shopping;
mod user;

/// Database identifier of a user
pub type UserId = i64;
/// Database identifier of a recipe
pub type RecipeId = i64;
/// Database identifier of an ingredient
pub type IngredientId = i64;
/// Database identifier of a tag
pub type TagId = i64;

pub use recipe::{
    Ingredient, NewIngredient, NewRecipe, NewRecipeIngredient, NewTag, Recipe,
    RecipeIngredientLine, Tag,
};
pub use shopping::{IngredientLine, ShoppingCartEntry, ShoppingListRow};
pub use user::{NewUser, User};
