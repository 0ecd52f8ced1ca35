// ABOUTME: Recipe routes: short link generation and shopping list download
// ABOUTME: Only the read-side recipe endpoints live here; CRUD is served elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Recipe Routes
//!
//! ## Endpoints
//!
//! - `GET /api/recipes/:id/get-link` - absolute short link for a recipe
//! - `GET /api/recipes/download_shopping_cart` - caller's shopping list as a
//!   text attachment
//!
//! Both also answer with a trailing slash.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::shopping_list::{CONTENT_TYPE, DOWNLOAD_FILENAME};
use crate::errors::AppError;
use crate::middleware::AuthenticatedUser;
use crate::models::RecipeId;
use crate::resources::ServerResources;
use crate::services::ShoppingList;

/// Body of a get-link response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLinkResponse {
    /// Absolute short link
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Routes for recipe links and shopping list download
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/:id/get-link", get(Self::handle_get_link))
            .route("/api/recipes/:id/get-link/", get(Self::handle_get_link))
            .route(
                "/api/recipes/download_shopping_cart",
                get(Self::handle_download_shopping_cart),
            )
            .route(
                "/api/recipes/download_shopping_cart/",
                get(Self::handle_download_shopping_cart),
            )
            .with_state(resources)
    }

    /// Parse a recipe id path segment; anything but a positive integer is an
    /// unknown recipe
    fn parse_recipe_id(raw: &str) -> Result<RecipeId, AppError> {
        match raw.parse::<RecipeId>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AppError::not_found(format!("Recipe {raw}"))),
        }
    }

    /// Handle short link generation
    async fn handle_get_link(
        State(resources): State<Arc<ServerResources>>,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe_id = Self::parse_recipe_id(&raw_id)?;

        if !resources.database.recipe_exists(recipe_id).await? {
            return Err(
                AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(raw_id)
            );
        }

        // positive i64 always fits in u64
        let token = resources.short_links.encode(recipe_id.unsigned_abs());
        let response = ShortLinkResponse {
            short_link: resources.short_link_url(&token),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle shopping list download
    async fn handle_download_shopping_cart(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let list = ShoppingList::for_user(&resources.database, user.id())
            .await
            .map_err(|e| e.with_user_id(user.id()))?;

        info!(user_id = user.id(), rows = list.len(), "Shopping list downloaded");

        let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, CONTENT_TYPE.to_owned()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            list.render(),
        )
            .into_response())
    }
}
