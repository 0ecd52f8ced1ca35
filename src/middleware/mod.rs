// ABOUTME: HTTP middleware: caller identity extraction, CORS setup, and request ids on error bodies
// ABOUTME: Request id generation, tracing spans, and timeouts are tower-http layers wired in server.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

/// Caller identity extractor
pub mod auth;
/// CORS configuration
pub mod cors;
/// Request id on error bodies
pub mod request_id;

pub use auth::AuthenticatedUser;
pub use cors::setup_cors;
pub use request_id::attach_request_id;
