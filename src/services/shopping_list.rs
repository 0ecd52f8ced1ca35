// ABOUTME: Shopping list aggregation over the recipes in a user's cart
// ABOUTME: Groups ingredient lines by exact (name, unit), sums amounts, sorts, renders text

//! Shopping list
//!
//! Every ingredient line of every recipe in the cart is grouped by its exact
//! `(name, measurement_unit)` pair. Units are never converted, so
//! `Salt, g` and `Salt, tsp` stay separate rows. Rows are ordered by name
//! using byte-wise (case-sensitive) comparison, then by unit.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppResult;
use crate::models::{IngredientLine, ShoppingListRow, UserId};

/// Read access to the ingredient lines of a user's cart
#[async_trait]
pub trait ShoppingCartSource: Send + Sync {
    /// All ingredient lines of all recipes in the user's cart, one entry per
    /// recipe line, unaggregated
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn cart_ingredient_lines(&self, user_id: UserId) -> AppResult<Vec<IngredientLine>>;
}

/// Group lines by `(name, unit)` and sum their amounts
#[must_use]
pub fn aggregate<I>(lines: I) -> Vec<ShoppingListRow>
where
    I: IntoIterator<Item = IngredientLine>,
{
    let mut totals: BTreeMap<(String, String), u64> = BTreeMap::new();
    for line in lines {
        *totals
            .entry((line.name, line.measurement_unit))
            .or_default() += u64::from(line.amount);
    }

    totals
        .into_iter()
        .map(|((name, measurement_unit), total_amount)| ShoppingListRow {
            name,
            total_amount,
            measurement_unit,
        })
        .collect()
}

/// An aggregated, ordered shopping list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    rows: Vec<ShoppingListRow>,
}

impl ShoppingList {
    /// Aggregate raw cart lines into a list
    #[must_use]
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = IngredientLine>,
    {
        Self {
            rows: aggregate(lines),
        }
    }

    /// Build the list for a user from any cart source
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    pub async fn for_user<S>(source: &S, user_id: UserId) -> AppResult<Self>
    where
        S: ShoppingCartSource + ?Sized,
    {
        let lines = source.cart_ingredient_lines(user_id).await?;
        let line_count = lines.len();
        let list = Self::from_lines(lines);
        debug!(
            user_id,
            lines = line_count,
            rows = list.len(),
            "Shopping list aggregated"
        );
        Ok(list)
    }

    /// Rows in display order
    #[must_use]
    pub fn rows(&self) -> &[ShoppingListRow] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the cart contributed no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as text, one `name, total, unit` line per row, each ending in
    /// a newline; an empty list renders as the empty string
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for ShoppingList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ShoppingList {
    type Item = ShoppingListRow;
    type IntoIter = std::vec::IntoIter<ShoppingListRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
