// ABOUTME: Shopping cart entries and the rows of an aggregated shopping list
// ABOUTME: IngredientLine is the flattened input, ShoppingListRow the grouped output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RecipeId, UserId};

/// A recipe a user intends to shop for, unique per `(user, recipe)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCartEntry {
    /// Cart owner
    pub user_id: UserId,
    /// Recipe in the cart
    pub recipe_id: RecipeId,
    /// When the recipe was added
    pub added_at: DateTime<Utc>,
}

/// One ingredient line of one recipe in a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name
    pub name: String,
    /// Unit the amount is expressed in
    pub measurement_unit: String,
    /// Amount from the recipe
    pub amount: u32,
}

impl IngredientLine {
    /// Build a line from its parts
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// Total amount of one `(name, unit)` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListRow {
    /// Ingredient name
    pub name: String,
    /// Sum of all amounts in the group
    pub total_amount: u64,
    /// Unit shared by the group
    pub measurement_unit: String,
}

impl Display for ShoppingListRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.name, self.total_amount, self.measurement_unit
        )
    }
}
