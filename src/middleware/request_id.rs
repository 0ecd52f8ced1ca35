// ABOUTME: Copies the request id into JSON error bodies on their way out
// ABOUTME: Runs inside the tower-http request id layers so the header is always present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::header::CONTENT_LENGTH;

use crate::constants::headers::REQUEST_ID;
use crate::errors::ErrorResponse;

/// Stamp `error.request_id` on error responses
///
/// Handlers return [`crate::errors::AppError`] without knowing the request id.
/// The error body is carried as a response extension; when present it is
/// rebuilt with the id read from the request header. Other responses pass
/// through untouched.
pub async fn attach_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let mut response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(mut body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    body.error.request_id = Some(request_id);
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    (parts, Json(body)).into_response()
}
