// ABOUTME: Reversible recipe id to short-link token codec over a fixed alphabet
// ABOUTME: Positional base-N encoding with zero-digit padding and strict token validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

//! Short-link codec
//!
//! Recipe ids are written in base N, N being the alphabet size, most
//! significant digit first. Tokens shorter than the configured minimum length
//! are left-padded with the alphabet's zero digit, so `decode` accepts both
//! padded and unpadded tokens.
//!
//! ```
//! use foodgram_core::short_link::ShortLinkCodec;
//!
//! let codec = ShortLinkCodec::default();
//! let token = codec.encode(42);
//! assert_eq!(codec.decode(&token), Ok(42));
//! assert!(codec.decode("not a token!").is_err());
//! ```

use thiserror::Error;

use crate::constants::short_links::{DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};
use crate::errors::AppError;

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Reasons a token or an alphabet is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortLinkError {
    /// Token has no characters
    #[error("Short link token is empty")]
    Empty,
    /// Token contains a character outside the alphabet
    #[error("Short link token contains invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Character index in the token
        position: usize,
    },
    /// Token value does not fit in 64 bits
    #[error("Short link token is too long to be a recipe id")]
    Overflow,
    /// Alphabet is unusable
    #[error("Invalid short link alphabet: {0}")]
    InvalidAlphabet(String),
}

impl From<ShortLinkError> for AppError {
    fn from(error: ShortLinkError) -> Self {
        Self::invalid_format(error.to_string()).with_source(error)
    }
}

/// Base-N codec between numeric ids and URL-safe tokens
#[derive(Debug, Clone)]
pub struct ShortLinkCodec {
    digits: Box<[u8]>,
    index: [u8; 128],
    min_length: usize,
}

impl ShortLinkCodec {
    /// Create a codec over a custom alphabet
    ///
    /// # Errors
    ///
    /// Returns [`ShortLinkError::InvalidAlphabet`] if the alphabet has fewer
    /// than two characters, repeats a character, or contains a character that
    /// would need escaping in a URL path segment
    pub fn new(alphabet: &str, min_length: usize) -> Result<Self, ShortLinkError> {
        if alphabet.chars().count() < 2 {
            return Err(ShortLinkError::InvalidAlphabet(
                "at least two characters are required".to_owned(),
            ));
        }

        let mut seen = [false; 128];
        for c in alphabet.chars() {
            if !is_url_safe(c) {
                return Err(ShortLinkError::InvalidAlphabet(format!(
                    "{c:?} is not URL-safe"
                )));
            }
            let slot = &mut seen[c as usize];
            if *slot {
                return Err(ShortLinkError::InvalidAlphabet(format!(
                    "{c:?} appears more than once"
                )));
            }
            *slot = true;
        }

        Ok(Self::from_checked(alphabet, min_length))
    }

    /// Build from an alphabet already known to be ASCII, unique, and URL-safe
    fn from_checked(alphabet: &str, min_length: usize) -> Self {
        let digits: Box<[u8]> = alphabet.bytes().collect();
        let mut index = [NOT_IN_ALPHABET; 128];
        for (value, &byte) in digits.iter().enumerate() {
            index[usize::from(byte)] = value as u8;
        }
        Self {
            digits,
            index,
            min_length,
        }
    }

    /// Default alphabet with a custom minimum token length
    #[must_use]
    pub fn with_min_length(min_length: usize) -> Self {
        Self::from_checked(DEFAULT_ALPHABET, min_length)
    }

    /// Number of digits in the alphabet
    #[must_use]
    pub fn base(&self) -> usize {
        self.digits.len()
    }

    /// Minimum token length
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// The alphabet as a string
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.digits.iter().copied().map(char::from).collect()
    }

    /// Encode an id into a token
    #[must_use]
    pub fn encode(&self, id: u64) -> String {
        let base = self.digits.len() as u64;
        let mut remaining = id;
        let mut reversed = Vec::with_capacity(self.min_length.max(8));

        loop {
            reversed.push(self.digits[(remaining % base) as usize]);
            remaining /= base;
            if remaining == 0 {
                break;
            }
        }
        while reversed.len() < self.min_length {
            reversed.push(self.digits[0]);
        }

        reversed.into_iter().rev().map(char::from).collect()
    }

    /// Check that a token is non-empty and uses only alphabet characters
    ///
    /// # Errors
    ///
    /// Returns [`ShortLinkError::Empty`] or [`ShortLinkError::InvalidCharacter`]
    pub fn validate(&self, token: &str) -> Result<(), ShortLinkError> {
        if token.is_empty() {
            return Err(ShortLinkError::Empty);
        }
        match token.chars().enumerate().find(|(_, c)| self.digit_of(*c).is_none()) {
            Some((position, character)) => Err(ShortLinkError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(()),
        }
    }

    /// Decode a token back into the id it was encoded from
    ///
    /// The token is validated before any arithmetic happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the token fails [`Self::validate`] or its value
    /// exceeds `u64::MAX`
    pub fn decode(&self, token: &str) -> Result<u64, ShortLinkError> {
        self.validate(token)?;

        let base = self.digits.len() as u64;
        // validated tokens are pure ASCII, every byte indexes the table
        token.bytes().try_fold(0_u64, |acc, byte| {
            let digit = u64::from(self.index[usize::from(byte)]);
            acc.checked_mul(base)
                .and_then(|shifted| shifted.checked_add(digit))
                .ok_or(ShortLinkError::Overflow)
        })
    }

    fn digit_of(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.index[c as usize] {
            NOT_IN_ALPHABET => None,
            digit => Some(digit),
        }
    }
}

impl Default for ShortLinkCodec {
    fn default() -> Self {
        Self::with_min_length(DEFAULT_MIN_LENGTH)
    }
}

/// RFC 3986 unreserved characters
const fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}
