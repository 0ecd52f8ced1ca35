// ABOUTME: Caller identity extractor reading the user id forwarded by the gateway
// ABOUTME: Missing header is 401, an unusable value is 400; no credentials are checked here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Caller identity
//!
//! Authentication happens in front of this service. The gateway forwards the
//! authenticated user's id in a trusted header whose name is configurable
//! (`USER_ID_HEADER`, default `x-user-id`).

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;
use http::HeaderMap;

use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::resources::ServerResources;

/// Id of the user making the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    /// Read the caller's id from `header_name`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when the header is absent and `AuthMalformed`
    /// when it is not a positive integer
    pub fn from_headers(headers: &HeaderMap, header_name: &str) -> AppResult<Self> {
        let raw = headers
            .get(header_name)
            .ok_or_else(AppError::auth_required)?
            .to_str()
            .map_err(|_| AppError::auth_malformed(format!("{header_name} is not valid text")))?
            .trim();

        match raw.parse::<UserId>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(AppError::auth_malformed(format!(
                "{header_name} must be a positive integer, got '{raw}'"
            ))),
        }
    }

    /// The user id
    #[must_use]
    pub const fn id(self) -> UserId {
        self.0
    }
}

#[async_trait]
impl FromRequestParts<Arc<ServerResources>> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        resources: &Arc<ServerResources>,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers, &resources.config.security.user_id_header)
    }
}
