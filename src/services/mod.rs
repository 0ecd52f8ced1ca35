// ABOUTME: Application services built on the database layer
// ABOUTME: Shopping list aggregation and reference data loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

/// CSV loader for ingredients and tags
pub mod data_loader;
/// Shopping list aggregation over a user's cart
pub mod shopping_list;

pub use data_loader::{DataLoader, FileOutcome, LoadReport};
pub use shopping_list::{ShoppingCartSource, ShoppingList};
