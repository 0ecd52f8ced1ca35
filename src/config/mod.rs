// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its typed sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Configuration module for the Foodgram API
//!
//! All settings come from environment variables; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    DatabaseConfig, DatabaseUrl, Environment, LogLevel, SecurityConfig, ServerConfig,
    ShortLinkConfig,
};
