// ABOUTME: Validation limits and default values shared across the Foodgram crates
// ABOUTME: Groups recipe field bounds and short-link codec defaults by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Constants grouped by domain

/// Recipe field limits
pub mod recipes {
    /// Smallest allowed ingredient amount
    pub const MIN_AMOUNT: u32 = 1;
    /// Smallest allowed cooking time in minutes
    pub const MIN_COOKING_TIME: u32 = 1;
    /// Largest allowed cooking time in minutes
    pub const MAX_COOKING_TIME: u32 = 32_000;
    /// Maximum recipe name length
    pub const RECIPE_NAME_MAX_LEN: usize = 256;
    /// Maximum ingredient name length
    pub const INGREDIENT_NAME_MAX_LEN: usize = 128;
    /// Maximum measurement unit length
    pub const MEASUREMENT_UNIT_MAX_LEN: usize = 64;
    /// Maximum tag name and slug length
    pub const TAG_MAX_LEN: usize = 32;
}

/// Short-link codec defaults
pub mod short_links {
    /// URL-safe alphabet without look-alike characters
    pub const DEFAULT_ALPHABET: &str = "mn6j2c4rv8bpygw95z7hsdaetxuk3fq";
    /// Tokens shorter than this are left-padded with the zero digit
    pub const DEFAULT_MIN_LENGTH: usize = 5;
    /// Path prefix the short links are served under
    pub const PATH_PREFIX: &str = "/s";
}

/// Shopping list download
pub mod shopping_list {
    /// Attachment file name for the downloaded list
    pub const DOWNLOAD_FILENAME: &str = "shopping_list.txt";
    /// Content type of the downloaded list
    pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";
}
