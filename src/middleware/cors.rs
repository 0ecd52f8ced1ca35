// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Builds the tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::ServerConfig;

/// Configure CORS from `CORS_ORIGINS`
///
/// `*` allows any origin. Otherwise only the listed origins are allowed;
/// entries that are not valid header values are skipped with a warning.
/// The configured user id header is exposed to browsers as an allowed
/// request header.
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins = &config.security.cors_origins;

    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| warn!(%origin, error = %e, "Ignoring invalid CORS origin"))
                    .ok()
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    let mut allow_headers = vec![header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN];
    if let Ok(user_header) = HeaderName::from_bytes(config.security.user_id_header.as_bytes()) {
        allow_headers.push(user_header);
    }

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(allow_headers)
        .allow_methods([Method::GET, Method::OPTIONS])
        .expose_headers([header::CONTENT_DISPOSITION, header::LOCATION])
}
