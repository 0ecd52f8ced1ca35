// ABOUTME: Foundation crate for the Foodgram recipe API
// ABOUTME: Shared error types, domain models, constants, and the short-link codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

#![deny(unsafe_code)]

//! # Foodgram Core
//!
//! Types shared by the API server and its tooling. Nothing in this crate
//! touches the network or the database directly; the optional features only
//! add conversions into framework types.
//!
//! - [`errors`]: unified `AppError` / `ErrorCode` with HTTP status mapping
//! - [`models`]: recipes, ingredients, cart entries, shopping list rows
//! - [`constants`]: validation limits and short-link defaults
//! - [`short_link`]: reversible recipe id to token codec

/// Validation limits and defaults
pub mod constants;
/// Unified error handling
pub mod errors;
/// Domain models
pub mod models;
/// Short-link token codec
pub mod short_link;
