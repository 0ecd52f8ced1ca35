// ABOUTME: Domain models shared with the foundation crate
// ABOUTME: Re-exports users, recipes, reference data, and shopping list types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

pub use foodgram_core::models::*;
