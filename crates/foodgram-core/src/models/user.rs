// ABOUTME: Minimal user account model owning recipes and a shopping cart
// ABOUTME: Authentication data lives outside this service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database identifier
    pub id: UserId,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
}

impl NewUser {
    /// Create a user with just a username and email
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}
