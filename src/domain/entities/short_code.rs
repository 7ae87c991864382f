//! Short code value type and alphabet policy.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Symbols a short code may contain: lowercase ASCII letters followed by digits.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Longest code the service will generate or accept.
pub const MAX_CODE_LENGTH: usize = 32;

/// Errors returned when parsing an externally supplied short code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortCodeError {
    #[error("short code length must be between 1 and {max}, got {0}", max = MAX_CODE_LENGTH)]
    Length(usize),
    #[error("short code contains a symbol outside [a-z0-9]: {0:?}")]
    Symbol(char),
}

/// A fixed-length identifier drawn from [`ALPHABET`].
///
/// Codes produced by the allocator are built through the generator and never
/// need re-validation. Codes arriving from outside (tests, lookups) go through
/// [`ShortCode::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses a code, checking length and alphabet membership.
    ///
    /// # Errors
    ///
    /// Returns [`ShortCodeError`] if the code is empty, longer than
    /// [`MAX_CODE_LENGTH`], or contains a symbol outside the alphabet.
    pub fn new(code: impl Into<String>) -> Result<Self, ShortCodeError> {
        let code = code.into();

        if code.is_empty() || code.len() > MAX_CODE_LENGTH {
            return Err(ShortCodeError::Length(code.len()));
        }

        if let Some(bad) = code.chars().find(|c| !is_alphabet_symbol(*c)) {
            return Err(ShortCodeError::Symbol(bad));
        }

        Ok(Self(code))
    }

    /// Wraps a code built from [`ALPHABET`] symbols by the generator.
    pub(crate) fn new_unchecked(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the code onto a redirect base URL, trimming trailing slashes from the base.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `c` belongs to [`ALPHABET`].
pub fn is_alphabet_symbol(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
