// ABOUTME: Unified error handling shared with the foundation crate
// ABOUTME: Re-exports AppError, ErrorCode, and the JSON error response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Error types
//!
//! Defined in `foodgram-core` with the `http-response` and `database-errors`
//! features enabled, so [`AppError`] converts from `sqlx::Error` and renders
//! itself as an axum response.

pub use foodgram_core::errors::*;
