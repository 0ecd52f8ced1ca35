// ABOUTME: HTTP route groups, each a struct with a routes(resources) constructor
// ABOUTME: Merged into one router with the tower-http layers by server.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

/// Liveness and readiness
pub mod health;
/// Recipe short links and shopping list download
pub mod recipes;
/// Short link resolution
pub mod short_links;

pub use health::HealthRoutes;
pub use recipes::{RecipeRoutes, ShortLinkResponse};
pub use short_links::ShortLinkRoutes;
