// ABOUTME: Recipe, ingredient, and tag models with creation-time validation
// ABOUTME: NewRecipe checks amounts, cooking time, and duplicate ingredient lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IngredientId, RecipeId, TagId, UserId};
use crate::constants::recipes::{
    INGREDIENT_NAME_MAX_LEN, MAX_COOKING_TIME, MEASUREMENT_UNIT_MAX_LEN, MIN_AMOUNT,
    MIN_COOKING_TIME, RECIPE_NAME_MAX_LEN, TAG_MAX_LEN,
};
use crate::errors::{AppError, AppResult};

/// Recipe tag (breakfast, dinner, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Database identifier
    pub id: TagId,
    /// Display name, unique
    pub name: String,
    /// URL slug, unique
    pub slug: String,
}

/// Fields required to create a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
}

impl NewTag {
    /// Create a tag from name and slug
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Check name and slug lengths and slug charset
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or overlong fields and `InvalidFormat`
    /// for a slug containing anything but ASCII alphanumerics, `-` and `_`
    pub fn validate(&self) -> AppResult<()> {
        check_text("Tag name", &self.name, TAG_MAX_LEN)?;
        check_text("Tag slug", &self.slug, TAG_MAX_LEN)?;
        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::invalid_format(format!(
                "Tag slug '{}' may only contain letters, digits, '-' and '_'",
                self.slug
            )));
        }
        Ok(())
    }
}

/// Ingredient reference data, unique on `(name, measurement_unit)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Database identifier
    pub id: IngredientId,
    /// Ingredient name
    pub name: String,
    /// Unit the amount is expressed in
    pub measurement_unit: String,
}

/// Fields required to create an ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIngredient {
    /// Ingredient name
    pub name: String,
    /// Unit the amount is expressed in
    pub measurement_unit: String,
}

impl NewIngredient {
    /// Build from name and unit
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurement_unit: measurement_unit.into(),
        }
    }

    /// Check name and unit lengths
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or overlong fields
    pub fn validate(&self) -> AppResult<()> {
        check_text("Ingredient name", &self.name, INGREDIENT_NAME_MAX_LEN)?;
        check_text(
            "Measurement unit",
            &self.measurement_unit,
            MEASUREMENT_UNIT_MAX_LEN,
        )
    }
}

/// One ingredient line of a stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Referenced ingredient
    pub ingredient_id: IngredientId,
    /// Ingredient name
    pub name: String,
    /// Unit the amount is expressed in
    pub measurement_unit: String,
    /// Amount, at least 1
    pub amount: u32,
}

/// Stored recipe with its ingredient lines and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Database identifier, stable once created
    pub id: RecipeId,
    /// Author
    pub author_id: UserId,
    /// Recipe name, unique per author
    pub name: String,
    /// Free-form description
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Publication time
    pub pub_date: DateTime<Utc>,
    /// Ingredient lines in insertion order
    pub ingredients: Vec<RecipeIngredientLine>,
    /// Tags ordered by name
    pub tags: Vec<Tag>,
}

/// One `(ingredient, amount)` pair of a recipe being created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipeIngredient {
    /// Referenced ingredient
    pub ingredient_id: IngredientId,
    /// Amount, at least 1
    pub amount: u32,
}

/// Fields required to create a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Author
    pub author_id: UserId,
    /// Recipe name
    pub name: String,
    /// Free-form description
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Ingredient lines, at least one
    pub ingredients: Vec<NewRecipeIngredient>,
    /// Tag ids
    #[serde(default)]
    pub tags: Vec<TagId>,
}

impl NewRecipe {
    /// Validate the recipe before it is written
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for an empty or overlong name, no ingredients,
    ///   a repeated ingredient, or a repeated tag
    /// - `ValueOutOfRange` for an amount below the minimum or a cooking time
    ///   outside the accepted range
    pub fn validate(&self) -> AppResult<()> {
        check_text("Recipe name", &self.name, RECIPE_NAME_MAX_LEN)?;

        if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&self.cooking_time) {
            return Err(AppError::out_of_range(format!(
                "Cooking time must be between {MIN_COOKING_TIME} and {MAX_COOKING_TIME} minutes, got {}",
                self.cooking_time
            )));
        }

        if self.ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "A recipe needs at least one ingredient",
            ));
        }

        let mut seen = HashSet::with_capacity(self.ingredients.len());
        for line in &self.ingredients {
            if line.amount < MIN_AMOUNT {
                return Err(AppError::out_of_range(format!(
                    "Amount of ingredient {} must be at least {MIN_AMOUNT}",
                    line.ingredient_id
                )));
            }
            if !seen.insert(line.ingredient_id) {
                return Err(AppError::invalid_input(format!(
                    "Ingredient {} is listed more than once",
                    line.ingredient_id
                )));
            }
        }

        let mut tags = HashSet::with_capacity(self.tags.len());
        if let Some(tag) = self.tags.iter().find(|tag| !tags.insert(**tag)) {
            return Err(AppError::invalid_input(format!(
                "Tag {tag} is listed more than once"
            )));
        }

        Ok(())
    }
}

fn check_text(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn recipe(ingredients: Vec<NewRecipeIngredient>) -> NewRecipe {
        NewRecipe {
            author_id: 1,
            name: "Pancakes".into(),
            text: "Mix and fry".into(),
            cooking_time: 20,
            ingredients,
            tags: vec![1, 2],
        }
    }

    #[test]
    fn test_valid_recipe() {
        let new = recipe(vec![
            NewRecipeIngredient { ingredient_id: 1, amount: 200 },
            NewRecipeIngredient { ingredient_id: 2, amount: 1 },
        ]);
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let new = recipe(vec![
            NewRecipeIngredient { ingredient_id: 1, amount: 200 },
            NewRecipeIngredient { ingredient_id: 1, amount: 5 },
        ]);
        let err = new.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let new = recipe(vec![NewRecipeIngredient { ingredient_id: 1, amount: 0 }]);
        assert_eq!(new.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_cooking_time_bounds() {
        let mut new = recipe(vec![NewRecipeIngredient { ingredient_id: 1, amount: 1 }]);
        new.cooking_time = 0;
        assert_eq!(new.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
        new.cooking_time = MAX_COOKING_TIME + 1;
        assert_eq!(new.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
        new.cooking_time = MAX_COOKING_TIME;
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut new = recipe(vec![NewRecipeIngredient { ingredient_id: 1, amount: 1 }]);
        new.tags = vec![3, 3];
        assert_eq!(new.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_tag_slug_charset() {
        let tag = NewTag { name: "Breakfast".into(), slug: "break fast".into() };
        assert_eq!(tag.validate().unwrap_err().code, ErrorCode::InvalidFormat);

        let tag = NewTag { name: "Breakfast".into(), slug: "breakfast".into() };
        assert!(tag.validate().is_ok());
    }
}
