// ABOUTME: Short link resolution route redirecting tokens to recipe pages
// ABOUTME: Malformed tokens are rejected before any lookup; unknown recipes are 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::constants::routes::RECIPE_PAGE_PREFIX;
use crate::errors::AppError;
use crate::models::RecipeId;
use crate::resources::ServerResources;

/// Routes for `/s/:token`
pub struct ShortLinkRoutes;

impl ShortLinkRoutes {
    /// Create short link routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/s/:token", get(Self::handle_redirect))
            .route("/s/:token/", get(Self::handle_redirect))
            .with_state(resources)
    }

    /// Resolve a token and answer `302 Found` to the recipe page
    async fn handle_redirect(
        State(resources): State<Arc<ServerResources>>,
        Path(token): Path<String>,
    ) -> Result<Response, AppError> {
        let decoded = resources
            .short_links
            .decode(&token)
            .map_err(|e| AppError::from(e).with_resource_id(token.clone()))?;

        let recipe_id = RecipeId::try_from(decoded)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::not_found(format!("Recipe for short link '{token}'")))?;

        if !resources.database.recipe_exists(recipe_id).await? {
            return Err(AppError::not_found(format!(
                "Recipe for short link '{token}'"
            )));
        }

        debug!(%token, recipe_id, "Short link resolved");
        let location = format!("{RECIPE_PAGE_PREFIX}/{recipe_id}/");
        Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
    }
}
